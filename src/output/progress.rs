use std::io::IsTerminal;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner counting history records as they are read.
///
/// The length of a piped stream is unknown, so this is a spinner rather than a
/// bar. Disabled in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct RecordProgress {
    progress_bar: ProgressBar,
}

impl RecordProgress {
    /// Creates a spinner drawing to stderr.
    ///
    /// # Panics
    ///
    /// Panics if the spinner template is invalid. The template is a
    /// compile-time constant.
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(quiet, is_tty)
    }

    fn new_with_visibility(quiet: bool, is_tty: bool) -> Self {
        let progress_bar = if quiet || !is_tty {
            ProgressBar::hidden()
        } else {
            Self::create_visible_spinner()
        };

        Self { progress_bar }
    }

    fn create_visible_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} Reading history: {human_pos} records ({per_sec})")
                // SAFETY: Template is a static string with valid format specifiers
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    }

    /// Count one more record.
    pub fn inc(&self) {
        self.progress_bar.inc(1);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.progress_bar.position()
    }

    /// Finishes the spinner and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
