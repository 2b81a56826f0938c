use std::io::IsTerminal;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar over the per-repository language fetches.
///
/// The bar is hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct FetchProgress {
    progress_bar: ProgressBar,
}

impl FetchProgress {
    /// Creates a progress bar for `total` repositories, drawn on stderr.
    ///
    /// # Panics
    ///
    /// Panics if the progress bar template is invalid. The template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(total: u64, quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, quiet, is_tty)
    }

    fn new_with_visibility(total: u64, quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_progress_bar(total)
        };

        Self { progress_bar }
    }

    fn create_visible_progress_bar(total: u64) -> ProgressBar {
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} Fetching languages [{bar:40.cyan/blue}] {pos}/{len} repos {msg}")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Advances the bar by one repository and shows its name.
    pub fn inc(&self, repo_name: &str) {
        self.progress_bar.set_message(repo_name.to_string());
        self.progress_bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
