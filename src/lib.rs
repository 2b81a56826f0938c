pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod output;
pub mod stats;

pub use error::{LangStatsError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUNTIME_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
