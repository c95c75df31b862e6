use crate::errata_publish::services::{CheckOutcome, CheckStatus};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// ScenarioReport - Outcome of one full round-trip scenario run
///
/// Contains one entry per independent check, plus enough context to identify
/// the run (repository id, timestamp, tool version). Adapters format this
/// into the appropriate output representation.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub tool_version: String,
    pub generated_at: String,
    pub repository_id: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl ScenarioReport {
    pub fn new(repository_id: String, outcomes: Vec<CheckOutcome>) -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            repository_id,
            outcomes,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.outcomes.iter().any(CheckOutcome::is_failed)
    }

    pub fn passed_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Passed))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Failed { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|s| matches!(s, CheckStatus::Skipped { .. }))
    }

    fn count(&self, predicate: impl Fn(&CheckStatus) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|o| predicate(&o.status))
            .count()
    }
}
