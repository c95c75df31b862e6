use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// This adapter implements the ProgressReporter port, writing progress
/// information to stderr so it doesn't interfere with stdout output.
/// Uses indicatif for a spinner while remote tasks run.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn clear_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn begin_wait(&self, message: &str) {
        self.clear_spinner();
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg}")
                .expect("Failed to set spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn end_wait(&self) {
        self.clear_spinner();
    }

    fn report_error(&self, message: &str) {
        self.clear_spinner();
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        self.clear_spinner();
        eprintln!();
        eprintln!("{}", message);
    }
}
