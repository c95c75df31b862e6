use crate::application::dto::ScenarioReport;
use crate::shared::Result;

/// ReportFormatter port for rendering a scenario report.
///
/// Formatters are pure: they take the report and produce a string; where the
/// string goes is the presenter's concern.
pub trait ReportFormatter {
    fn format(&self, report: &ScenarioReport) -> Result<String>;
}
