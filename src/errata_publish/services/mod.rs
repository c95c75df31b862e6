pub mod checks;
pub mod task_verifier;

pub use checks::{CheckOutcome, CheckStatus};
pub use task_verifier::{verify_task, TaskFailure};
