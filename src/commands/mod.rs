pub mod config;
pub mod context;
pub mod generate;
pub mod init;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::{format_config_text, run_config};
pub use context::{CollectedStats, NO_DATA_MESSAGE, collect_stats};
pub use generate::{GenerateOutcome, generate_chart, run_generate};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use summary::{run_summary, summarize};
