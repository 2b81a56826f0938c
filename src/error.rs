use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangStatsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing API token: environment variable {0} is not set")]
    MissingToken(String),

    #[error("Authentication failed for {url}: HTTP {status}")]
    Auth { url: String, status: u16 },

    #[error("Request to {url} failed: HTTP {status}")]
    Http { url: String, status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid exclude pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl LangStatsError {
    /// Short category name used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::MissingToken(_) => "MissingToken",
            Self::Auth { .. } => "Auth",
            Self::Http { .. } => "Http",
            Self::Network(_) => "Network",
            Self::FileWrite { .. } => "FileWrite",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::Io(_) => "IO",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonParse(_) => "JsonParse",
        }
    }

    /// Process exit code for this error: configuration problems exit with 2,
    /// everything else with 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::TomlParse(_) | Self::InvalidPattern { .. } => {
                crate::EXIT_CONFIG_ERROR
            }
            _ => crate::EXIT_RUNTIME_ERROR,
        }
    }

    /// The primary message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) | Self::Network(msg) => msg.clone(),
            Self::MissingToken(var) => format!("environment variable {var} is not set"),
            Self::Auth { url, .. } | Self::Http { url, .. } => url.clone(),
            Self::FileWrite { path, .. } => path.display().to_string(),
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonParse(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Auth { status, .. } | Self::Http { status, .. } => {
                Some(format!("server responded with HTTP {status}"))
            }
            Self::FileWrite { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint printed under the error.
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format with 'lang-stats config validate'".to_string())
            }
            Self::MissingToken(var) => Some(format!(
                "Export a personal access token, e.g. 'export {var}=<token>'"
            )),
            Self::Auth { .. } => {
                Some("Check that the token is valid and has not expired".to_string())
            }
            Self::Http { status: 404, .. } => {
                Some("Check that the account name is spelled correctly".to_string())
            }
            Self::FileWrite { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                Some("Check write permissions for the output path".to_string())
            }
            Self::InvalidPattern { .. } => Some(
                "Exclude entries are glob patterns; escape '*', '?', '[' and '{' to match them literally"
                    .to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, LangStatsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
