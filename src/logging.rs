//! Diagnostic logging to stderr.
//!
//! Results go to stdout; everything emitted through `tracing` goes to stderr so
//! the two never interleave in a pipe.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count. `--quiet` wins over any count.
#[must_use]
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "off";
    }
    match verbose {
        0 => "lang_stats=warn",
        1 => "lang_stats=info",
        2 => "lang_stats=debug",
        _ => "lang_stats=trace",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the flags.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
