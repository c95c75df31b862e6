/// Mock implementations for testing
mod mock_issue_tracker;
mod mock_progress_reporter;
mod mock_remote_api;

pub use mock_issue_tracker::MockIssueTracker;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_remote_api::MockRemoteApi;
