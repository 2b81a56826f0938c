use std::fs;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{Config, LoadResult, parse_config};
use crate::output::ErrorOutput;
use crate::{EXIT_SUCCESS, LangStatsError, Result};

use super::context::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    let output = ErrorOutput::new(cli.color);
    let result = match &args.action {
        ConfigAction::Validate { config } => run_config_validate_impl(config).map(|_| {
            format!("Configuration is valid: {}\n", config.display())
        }),
        ConfigAction::Show { config, format } => {
            run_config_show_impl(config.as_deref(), *format, cli.no_config)
        }
    };

    match result {
        Ok(text) => {
            print!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => {
            output.print_error(&e);
            e.exit_code()
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or has semantic errors.
pub(crate) fn run_config_validate_impl(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Err(LangStatsError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path).map_err(|e| {
        LangStatsError::Config(format!(
            "Failed to read config file {}: {e}",
            config_path.display()
        ))
    })?;
    parse_config(&content)
}

/// Renders the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialized.
pub(crate) fn run_config_show_impl(
    config_path: Option<&Path>,
    format: ConfigOutputFormat,
    no_config: bool,
) -> Result<String> {
    let loaded = load_config(config_path, no_config)?;
    match format {
        ConfigOutputFormat::Text => format_config_text(&loaded),
        ConfigOutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&loaded.config)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// TOML rendering of the effective configuration, headed by where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be serialized.
pub fn format_config_text(loaded: &LoadResult) -> Result<String> {
    let body = toml::to_string_pretty(&loaded.config)
        .map_err(|e| LangStatsError::Config(format!("Failed to serialize config: {e}")))?;
    let source = loaded
        .source
        .as_ref()
        .map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string());
    Ok(format!("# Effective configuration (source: {source})\n\n{body}"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
