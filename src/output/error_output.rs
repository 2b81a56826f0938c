//! Error and warning output on stderr.
//!
//! Format: `✖ Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::LangStatsError;

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: match mode {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => Self::stderr_supports_color(),
            },
        }
    }

    fn stderr_supports_color() -> bool {
        // https://no-color.org/: presence of the variable disables color
        if std::env::var_os("NO_COLOR").is_some() {
            return false;
        }
        std::io::stderr().is_terminal()
    }

    /// Prints an error with its detail and suggestion to stderr.
    pub fn print_error(&self, err: &LangStatsError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(
            &mut stderr,
            err.error_type(),
            &err.message(),
            err.detail().as_deref(),
            err.suggestion().as_deref(),
        );
    }

    /// Prints a warning to stderr.
    pub fn print_warning(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message);
    }

    /// Writes an error to a writer (for testing).
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Write failures on stderr are ignored; there is nowhere left to report them.
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {error_type}: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Writes a warning to a writer (for testing).
    pub fn write_warning<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "⚠ Warning: {message}");
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
