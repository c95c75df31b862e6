use errata_roundtrip::ports::outbound::ProgressReporter;
use std::cell::RefCell;

/// Mock ProgressReporter that records every message it receives.
#[derive(Default)]
pub struct MockProgressReporter {
    pub messages: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn begin_wait(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn end_wait(&self) {}

    fn report_error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl ProgressReporter for &MockProgressReporter {
    fn report(&self, message: &str) {
        (**self).report(message);
    }

    fn begin_wait(&self, message: &str) {
        (**self).begin_wait(message);
    }

    fn end_wait(&self) {
        (**self).end_wait();
    }

    fn report_error(&self, message: &str) {
        (**self).report_error(message);
    }

    fn report_completion(&self, message: &str) {
        (**self).report_completion(message);
    }
}
