use crate::errata_publish::domain::{Task, TaskState};
use thiserror::Error;

/// Why a task failed verification.
///
/// The two tiers are deliberately distinct: a task can reach `finished` at
/// the control-flow level while the operation it performed logically failed,
/// reported only through the result payload. Each tier gets its own
/// diagnostic so the failure mode is obvious from the message alone.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskFailure {
    #[error("{label}: expected task state \"finished\", got \"{state}\"")]
    NotFinished { label: String, state: &'static str },

    #[error("{label}: task result is not successful: {details}")]
    Unsuccessful { label: String, details: String },
}

/// Asserts that a task completed successfully.
///
/// Two checks, in order: the completion state must be `finished`, and if the
/// task carries a result payload its `success_flag` must be true. On a false
/// flag the payload's details are reproduced verbatim so the server's own
/// diagnostic is not lost. The task is assumed to already be terminal;
/// waiting for that is the API client's job.
pub fn verify_task(task: &Task, label: &str) -> Result<(), TaskFailure> {
    if task.state != TaskState::Finished {
        return Err(TaskFailure::NotFinished {
            label: label.to_string(),
            state: task.state.as_str(),
        });
    }

    if let Some(result) = &task.result {
        if !result.success_flag {
            return Err(TaskFailure::Unsuccessful {
                label: label.to_string(),
                details: result.details.to_string(),
            });
        }
    }

    Ok(())
}
