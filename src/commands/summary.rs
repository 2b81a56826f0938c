use crate::cli::{Cli, SummaryArgs};
use crate::config::{Config, validate_config};
use crate::github::RepoSource;
use crate::output::{ErrorOutput, LanguageSummary, SummaryFormat, formatter_for};
use crate::{EXIT_SUCCESS, Result};

use super::context::{
    NO_DATA_MESSAGE, apply_source_overrides, build_api, collect_stats, load_config,
    warn_unused_excludes,
};

#[must_use]
pub fn run_summary(args: &SummaryArgs, cli: &Cli) -> i32 {
    let output = ErrorOutput::new(cli.color);
    match run_summary_impl(args, cli, &output) {
        Ok(report) => {
            print!("{report}");
            EXIT_SUCCESS
        }
        Err(e) => {
            output.print_error(&e);
            e.exit_code()
        }
    }
}

/// Runs the pipeline up to the ratio policy and returns the formatted table.
///
/// # Errors
/// Returns an error if the configuration is invalid, the token is missing, or
/// any API request fails.
pub(crate) fn run_summary_impl(
    args: &SummaryArgs,
    cli: &Cli,
    output: &ErrorOutput,
) -> Result<String> {
    let mut config = load_config(args.source.config.as_deref(), cli.no_config)?.config;
    apply_source_overrides(&mut config, &args.source);
    validate_config(&config)?;

    let api = build_api(&config)?;
    summarize(&api, &config, args.format, cli.quiet, output)
}

/// Format the reduced language table. Without data the informational message
/// is returned instead.
///
/// # Errors
/// Returns an error if `source` fails or serialization fails.
pub fn summarize(
    source: &impl RepoSource,
    config: &Config,
    format: SummaryFormat,
    quiet: bool,
    output: &ErrorOutput,
) -> Result<String> {
    let stats = collect_stats(source, config, quiet)?;
    warn_unused_excludes(&stats, output, quiet);

    if !stats.has_data() {
        return Ok(format!("{NO_DATA_MESSAGE}\n"));
    }

    let summary = LanguageSummary::new(&stats.totals, &stats.ratios);
    formatter_for(format).format(&summary)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
