use crate::application::dto::ScenarioReport;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the report as pretty-printed JSON,
/// suitable for machine consumption in CI pipelines.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ScenarioReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
