use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{ChartStyle, LOCAL_CONFIG_NAME, PolicyKind};
use crate::output::{ColorMode, SummaryFormat};

/// Output format for `config show`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    /// TOML, as it would appear in a config file
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "lang-stats")]
#[command(
    author,
    version,
    about = "Chart the programming languages used across your GitHub repositories"
)]
#[command(long_about = "Fetches the language byte counts of every repository an account owns, \
    aggregates them and renders the shares as an SVG chart.\n\n\
    Exit codes:\n  \
    0 - Success (also when no language data was found)\n  \
    1 - GitHub API, network or output error\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch language statistics and write the SVG chart
    Generate(GenerateArgs),

    /// Print the language table instead of rendering a chart
    Summary(SummaryArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

/// Options shared by every command that talks to GitHub.
#[derive(Args, Debug, Default, Clone)]
pub struct SourceArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List this user's public repositories instead of the token owner's
    #[arg(short, long)]
    pub user: Option<String>,

    /// Exclude repositories by name (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// How minor languages are reduced
    #[arg(long, value_enum)]
    pub policy: Option<PolicyKind>,

    /// Bucket languages below this percentage into "Other" (threshold policy)
    #[arg(long)]
    pub min_percent: Option<f64>,

    /// Keep only the N largest languages (top-n policy)
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Parser, Debug, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Chart style
    #[arg(short, long, value_enum)]
    pub style: Option<ChartStyle>,

    /// Where to write the SVG (overwritten if it exists)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Default)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: SummaryFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
