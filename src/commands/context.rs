use std::path::Path;
use std::time::Duration;

use crate::cli::SourceArgs;
use crate::config::{Config, ConfigLoader, FileConfigLoader, LoadResult};
use crate::error::{LangStatsError, Result};
use crate::github::{
    GitHubApi, ListingTarget, RepoFilter, RepoSource, ReqwestClient, list_repositories,
};
use crate::output::{ErrorOutput, FetchProgress};
use crate::stats::{LanguageTotals, RatioPolicy, Ratios, aggregate_languages};

/// Message printed when the filtered repositories report no language bytes.
pub const NO_DATA_MESSAGE: &str = "No language data found.";

/// Load configuration from the filesystem.
///
/// # Errors
/// Returns an error if the configuration file cannot be read, parsed, or validated.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    if no_config {
        return Ok(LoadResult {
            config: Config::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Apply the command-line overrides shared by `generate` and `summary`.
///
/// `--exclude` patterns are added to the configured ones; every other flag
/// replaces its config value.
pub(crate) fn apply_source_overrides(config: &mut Config, args: &SourceArgs) {
    if let Some(user) = &args.user {
        config.account.user = Some(user.clone());
    }

    config.account.exclude.extend(args.exclude.iter().cloned());

    if let Some(policy) = args.policy {
        config.chart.policy = Some(policy);
    }

    if let Some(min_percent) = args.min_percent {
        config.chart.min_percent = min_percent;
    }

    if let Some(top) = args.top {
        config.chart.top_n = top;
    }
}

/// Read the API token from the environment variable named by `token_env`.
///
/// # Errors
/// Returns `MissingToken` if the variable is unset, not unicode, or blank.
pub(crate) fn read_token(token_env: &str) -> Result<String> {
    resolve_token(token_env, std::env::var(token_env).ok())
}

pub(crate) fn resolve_token(token_env: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
        _ => Err(LangStatsError::MissingToken(token_env.to_string())),
    }
}

/// Build the GitHub client for `config`. The token is checked before any
/// request is made.
///
/// # Errors
/// Returns an error if the token is missing or the HTTP client cannot be built.
pub(crate) fn build_api(config: &Config) -> Result<GitHubApi<ReqwestClient>> {
    let token = read_token(&config.api.token_env)?;
    let client = ReqwestClient::new(&token, Duration::from_secs(config.api.timeout_secs))?;
    tracing::debug!(base_url = %config.api.base_url, "using GitHub API");
    Ok(GitHubApi::new(
        client,
        &config.api.base_url,
        ListingTarget::from_config(config),
    ))
}

/// Everything the pipeline produced up to, and including, the ratio policy.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectedStats {
    pub totals: LanguageTotals,
    /// Reduced ratio mapping; empty when there is no data.
    pub ratios: Ratios,
    /// Exclude patterns that matched no listed repository.
    pub unused_excludes: Vec<String>,
}

impl CollectedStats {
    #[must_use]
    pub fn has_data(&self) -> bool {
        self.totals.has_data()
    }
}

/// List, filter, aggregate and reduce: every step before rendering.
///
/// # Errors
/// Returns the first listing or language fetch error; nothing partial is kept.
pub fn collect_stats(
    source: &impl RepoSource,
    config: &Config,
    quiet: bool,
) -> Result<CollectedStats> {
    let filter = RepoFilter::new(&config.account.exclude)?;
    let listed = list_repositories(source)?;
    let unused_excludes = filter
        .unused_patterns(&listed)
        .into_iter()
        .map(str::to_string)
        .collect();
    let repos = filter.apply(listed);
    tracing::info!(repositories = repos.len(), "aggregating languages");

    let progress = FetchProgress::new(repos.len() as u64, quiet);
    let aggregated = aggregate_languages(source, &repos, |repo| progress.inc(&repo.name));
    progress.finish();
    let totals = aggregated?;

    let ratios = if totals.has_data() {
        let policy = RatioPolicy::from_config(&config.chart);
        tracing::debug!(?policy, "reducing ratios");
        policy.apply(&Ratios::from_totals(&totals))
    } else {
        Ratios::default()
    };

    Ok(CollectedStats {
        totals,
        ratios,
        unused_excludes,
    })
}

/// Warn about exclude patterns that did not match anything.
pub(crate) fn warn_unused_excludes(stats: &CollectedStats, output: &ErrorOutput, quiet: bool) {
    if quiet {
        return;
    }
    for pattern in &stats.unused_excludes {
        output.print_warning(&format!(
            "exclude pattern '{pattern}' did not match any repository"
        ));
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
