//! Semantic checks that TOML deserialization cannot express.

use crate::error::{LangStatsError, Result};
use crate::github::RepoFilter;

use super::Config;

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a numeric option is out of range, the API base URL is not
/// http(s), or an exclude pattern does not compile.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_chart_section(config)?;
    validate_api_section(config)?;
    RepoFilter::new(&config.account.exclude)?;
    Ok(())
}

fn validate_chart_section(config: &Config) -> Result<()> {
    let chart = &config.chart;

    if !(0.0..=100.0).contains(&chart.min_percent) {
        return Err(LangStatsError::Config(format!(
            "chart.min_percent must be between 0.0 and 100.0, got {}",
            chart.min_percent
        )));
    }

    if chart.top_n == 0 {
        return Err(LangStatsError::Config(
            "chart.top_n must be at least 1".to_string(),
        ));
    }

    if chart.output.to_string_lossy().trim().is_empty() {
        return Err(LangStatsError::Config(
            "chart.output must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_api_section(config: &Config) -> Result<()> {
    let api = &config.api;

    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        return Err(LangStatsError::Config(format!(
            "api.base_url must start with http:// or https://, got '{}'",
            api.base_url
        )));
    }

    if api.token_env.trim().is_empty() {
        return Err(LangStatsError::Config(
            "api.token_env must name an environment variable".to_string(),
        ));
    }

    if api.timeout_secs == 0 {
        return Err(LangStatsError::Config(
            "api.timeout_secs must be at least 1".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
