use crate::errata_publish::domain::{Erratum, ScenarioFixture, Task, UpdateinfoTree};
use crate::errata_publish::services::task_verifier::verify_task;
use serde::Serialize;

/// Result of one independent check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    #[serde(flatten)]
    pub status: CheckStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckStatus {
    Passed,
    Failed { reason: String },
    Skipped { reason: String },
}

impl CheckOutcome {
    pub fn passed(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Passed,
        }
    }

    pub fn failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: CheckStatus::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, CheckStatus::Failed { .. })
    }
}

/// Every import is expected to spawn exactly one task, and that task must
/// have completed successfully. The count expectation is enforced strictly;
/// a server spawning zero or several tasks fails this check rather than
/// aborting the run.
pub fn check_import_tasks(label: &str, tasks: &[Task]) -> CheckOutcome {
    let name = format!("import task ({label})");
    if tasks.len() != 1 {
        return CheckOutcome::failed(
            &name,
            format!("expected exactly 1 spawned task, got {}", tasks.len()),
        );
    }
    match verify_task(&tasks[0], &name) {
        Ok(()) => CheckOutcome::passed(&name),
        Err(failure) => CheckOutcome::failed(&name, failure.to_string()),
    }
}

/// Every task spawned by the publish request must have completed successfully.
pub fn check_publish_tasks(tasks: &[Task]) -> CheckOutcome {
    let name = "publish task";
    if tasks.is_empty() {
        return CheckOutcome::failed(name, "publish spawned no tasks");
    }
    for task in tasks {
        if let Err(failure) = verify_task(task, name) {
            return CheckOutcome::failed(name, failure.to_string());
        }
    }
    CheckOutcome::passed(name)
}

/// The generated document must have one top-level `updates` container.
pub fn check_root_tag(tree: &UpdateinfoTree) -> CheckOutcome {
    let name = "updateinfo root element";
    if tree.root_tag() == "updates" {
        CheckOutcome::passed(name)
    } else {
        CheckOutcome::failed(
            name,
            format!("expected root tag \"updates\", got \"{}\"", tree.root_tag()),
        )
    }
}

/// One `update` node per imported erratum.
pub fn check_update_count(tree: &UpdateinfoTree, fixture: &ScenarioFixture) -> CheckOutcome {
    let name = "update node count";
    let expected = fixture.len();
    let actual = tree.updates().len();
    if actual == expected {
        CheckOutcome::passed(name)
    } else {
        CheckOutcome::failed(
            name,
            format!("expected {expected} update node(s), got {actual}"),
        )
    }
}

/// Identifiers across update nodes must be unique within a single tree.
pub fn check_unique_ids(tree: &UpdateinfoTree) -> CheckOutcome {
    let name = "update id uniqueness";
    match tree.nodes_by_id() {
        Ok(_) => CheckOutcome::passed(name),
        Err(e) => CheckOutcome::failed(name, e.to_string()),
    }
}

/// The description attached to the given erratum's node must equal the
/// submitted description character-for-character. Validates that non-ASCII
/// text and unwrapped long lines are neither corrupted nor re-wrapped by the
/// server's generator.
pub fn check_description_roundtrip(tree: &UpdateinfoTree, erratum: &Erratum) -> CheckOutcome {
    let name = "description round-trip";
    let by_id = match tree.nodes_by_id() {
        Ok(by_id) => by_id,
        Err(e) => return CheckOutcome::failed(name, e.to_string()),
    };
    let Some(node) = by_id.get(erratum.id.as_str()) else {
        return CheckOutcome::failed(name, format!("no update node with id {}", erratum.id));
    };
    match node.description.as_deref() {
        Some(text) if text == erratum.description => CheckOutcome::passed(name),
        Some(text) => CheckOutcome::failed(
            name,
            format!(
                "description was modified in transit\nsubmitted: {:?}\ngenerated: {:?}",
                erratum.description, text
            ),
        ),
        None => CheckOutcome::failed(name, "generated update node has no description element"),
    }
}

/// When `reboot_suggested` was not supplied on input, the corresponding
/// element must be entirely absent from the output - not present with a false
/// value, not present and empty.
pub fn check_reboot_suggested_omitted(tree: &UpdateinfoTree, erratum: &Erratum) -> CheckOutcome {
    let name = "reboot_suggested omission";
    let by_id = match tree.nodes_by_id() {
        Ok(by_id) => by_id,
        Err(e) => return CheckOutcome::failed(name, e.to_string()),
    };
    let Some(node) = by_id.get(erratum.id.as_str()) else {
        return CheckOutcome::failed(name, format!("no update node with id {}", erratum.id));
    };
    if node.reboot_suggested_count == 0 {
        CheckOutcome::passed(name)
    } else {
        CheckOutcome::failed(
            name,
            format!(
                "{} reboot_suggested element(s) were found where none were expected",
                node.reboot_suggested_count
            ),
        )
    }
}
