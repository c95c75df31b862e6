mod presenter;
mod progress_reporter;

pub use presenter::{FileWriter, StdoutPresenter};
pub use progress_reporter::StderrProgressReporter;
