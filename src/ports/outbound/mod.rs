/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (content server, issue tracker,
/// console, file system).
pub mod issue_tracker;
pub mod output_presenter;
pub mod progress_reporter;
pub mod remote_api;
pub mod report_formatter;

pub use issue_tracker::IssueTracker;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use remote_api::RemoteApi;
pub use report_formatter::ReportFormatter;
