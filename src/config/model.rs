use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_OUTPUT: &str = "language_stats.svg";
pub const DEFAULT_MIN_PERCENT: f64 = 1.0;
pub const DEFAULT_TOP_N: usize = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which chart the renderer produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ChartStyle {
    /// Horizontal bars with percentage labels
    #[default]
    Bar,
    /// Circular proportional chart
    Pie,
}

/// How the ratio mapping is reduced before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    /// Merge languages below `min_percent` into "Other"
    Threshold,
    /// Keep only the `top_n` largest languages
    TopN,
}

impl ChartStyle {
    /// Policy used when none is configured explicitly.
    #[must_use]
    pub const fn default_policy(self) -> PolicyKind {
        match self {
            Self::Bar => PolicyKind::TopN,
            Self::Pie => PolicyKind::Threshold,
        }
    }
}

/// Whose repositories are listed, and which of them are skipped [account].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountConfig {
    /// Account name. `None` lists the repositories of the token's owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Send `visibility=public` when listing the authenticated user's repositories.
    #[serde(default = "default_true")]
    pub public_only: bool,

    /// Repository names (glob patterns) left out of the aggregation.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            user: None,
            public_only: true,
            exclude: Vec::new(),
        }
    }
}

/// Chart rendering options [chart].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default)]
    pub style: ChartStyle,

    /// Explicit policy; falls back to [`ChartStyle::default_policy`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyKind>,

    /// Minimum share (percent) a language needs to be shown on its own.
    #[serde(default = "default_min_percent")]
    pub min_percent: f64,

    /// Number of languages kept by the top-N policy.
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Output SVG path, overwritten on every run.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            policy: None,
            min_percent: DEFAULT_MIN_PERCENT,
            top_n: DEFAULT_TOP_N,
            output: default_output(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn effective_policy(&self) -> PolicyKind {
        self.policy.unwrap_or_else(|| self.style.default_policy())
    }
}

/// REST API connection settings [api].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the bearer token.
    #[serde(default = "default_token_env")]
    pub token_env: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token_env: default_token_env(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub chart: ChartConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

const fn default_true() -> bool {
    true
}

const fn default_min_percent() -> f64 {
    DEFAULT_MIN_PERCENT
}

const fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_token_env() -> String {
    DEFAULT_TOKEN_ENV.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
