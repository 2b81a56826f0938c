use std::fs;

use crate::cli::InitArgs;
use crate::output::ErrorOutput;
use crate::{EXIT_SUCCESS, LangStatsError, Result};

#[must_use]
pub fn run_init(args: &InitArgs, output: &ErrorOutput) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            output.print_error(&e);
            e.exit_code()
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(LangStatsError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        LangStatsError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# lang-stats configuration file

[account]
# List this user's public repositories instead of the token owner's
# user = "octocat"

# Only list public repositories of the token owner (ignored when `user` is set)
public_only = true

# Repository names to leave out (glob syntax). Forks are always skipped.
exclude = [
    # "dotfiles",
    # "*.github.io",
]

[chart]
# Chart style: "bar" or "pie"
style = "bar"

# How minor languages are reduced: "threshold" or "top-n"
# (default: top-n for bar charts, threshold for pie charts)
# policy = "top-n"

# Threshold policy: languages below this percentage are merged into "Other"
min_percent = 1.0

# Top-N policy: number of languages kept
top_n = 5

# Output file, overwritten on every run
output = "language_stats.svg"

[api]
base_url = "https://api.github.com"

# Environment variable holding a personal access token
token_env = "GITHUB_TOKEN"

# Request timeout in seconds
timeout_secs = 30
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
