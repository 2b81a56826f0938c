use std::path::PathBuf;

use crate::cli::{Cli, GenerateArgs};
use crate::config::{Config, validate_config};
use crate::github::RepoSource;
use crate::output::{ErrorOutput, renderer_for, write_chart};
use crate::{EXIT_SUCCESS, Result};

use super::context::{
    NO_DATA_MESSAGE, apply_source_overrides, build_api, collect_stats, load_config,
    warn_unused_excludes,
};

/// What a `generate` run ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The chart was written to `path` with one entry per language.
    Written { path: PathBuf, languages: usize },
    /// The repositories reported no language bytes; nothing was written.
    NoData,
}

#[must_use]
pub fn run_generate(args: &GenerateArgs, cli: &Cli) -> i32 {
    let output = ErrorOutput::new(cli.color);
    match run_generate_impl(args, cli, &output) {
        Ok(GenerateOutcome::Written { path, .. }) => {
            println!("{} generated.", path.display());
            EXIT_SUCCESS
        }
        Ok(GenerateOutcome::NoData) => {
            println!("{NO_DATA_MESSAGE}");
            EXIT_SUCCESS
        }
        Err(e) => {
            output.print_error(&e);
            e.exit_code()
        }
    }
}

/// Resolves the effective configuration and runs the pipeline against GitHub.
///
/// # Errors
/// Returns an error if the configuration is invalid, the token is missing, any
/// API request fails, or the chart cannot be written.
pub(crate) fn run_generate_impl(
    args: &GenerateArgs,
    cli: &Cli,
    output: &ErrorOutput,
) -> Result<GenerateOutcome> {
    let mut config = load_config(args.source.config.as_deref(), cli.no_config)?.config;
    apply_generate_overrides(&mut config, args);
    validate_config(&config)?;

    let api = build_api(&config)?;
    generate_chart(&api, &config, cli.quiet, output)
}

pub(crate) fn apply_generate_overrides(config: &mut Config, args: &GenerateArgs) {
    apply_source_overrides(config, &args.source);

    if let Some(style) = args.style {
        config.chart.style = style;
    }

    if let Some(output) = &args.output {
        config.chart.output.clone_from(output);
    }
}

/// Collect, render and write the chart for an already-resolved configuration.
///
/// When there is no language data the output file is left untouched.
///
/// # Errors
/// Returns an error if `source` fails or the chart cannot be written.
pub fn generate_chart(
    source: &impl RepoSource,
    config: &Config,
    quiet: bool,
    output: &ErrorOutput,
) -> Result<GenerateOutcome> {
    let stats = collect_stats(source, config, quiet)?;
    warn_unused_excludes(&stats, output, quiet);

    if !stats.has_data() {
        tracing::info!("no language data, skipping chart");
        return Ok(GenerateOutcome::NoData);
    }

    let svg = renderer_for(config.chart.style).render(&stats.ratios);
    let path = config.chart.output.clone();
    write_chart(&path, &svg)?;

    Ok(GenerateOutcome::Written {
        path,
        languages: stats.ratios.len(),
    })
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
