use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Completion state of a server-side task.
///
/// The only state a dependent assertion may rely on is [`TaskState::Finished`];
/// the other terminal states (`error`, `canceled`) also stop a wait loop but
/// fail verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskState {
    Waiting,
    Skipped,
    Accepted,
    Running,
    Suspended,
    Finished,
    Error,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl TaskState {
    /// Whether the state is terminal, i.e. the task will never change again.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            TaskState::Finished | TaskState::Error | TaskState::Canceled | TaskState::Skipped
        )
    }

    /// Lowercase wire name, used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskState::Waiting => "waiting",
            TaskState::Skipped => "skipped",
            TaskState::Accepted => "accepted",
            TaskState::Running => "running",
            TaskState::Suspended => "suspended",
            TaskState::Finished => "finished",
            TaskState::Error => "error",
            TaskState::Canceled => "canceled",
            TaskState::Unknown => "unknown",
        }
    }
}

/// Result payload a finished task may carry.
///
/// A task can reach `finished` at the control-flow level while the operation
/// it performed logically failed; that failure is reported only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
    pub success_flag: bool,
    #[serde(default)]
    pub details: Value,
}

/// One asynchronous unit of work spawned by an import or publish request.
///
/// Observed, never mutated: the server owns the lifecycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_href", default)]
    pub href: Option<String>,
    pub state: TaskState,
    #[serde(default)]
    pub result: Option<TaskResult>,
}

/// Reference to a spawned task inside an asynchronous call response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRef {
    #[serde(rename = "_href")]
    pub href: String,
}

/// Envelope returned by endpoints that spawn background work.
#[derive(Debug, Clone, Deserialize)]
pub struct AsyncCallReport {
    #[serde(default)]
    pub spawned_tasks: Vec<TaskRef>,
}
