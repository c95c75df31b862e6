use crate::application::dto::ScenarioReport;
use crate::errata_publish::services::CheckStatus;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use owo_colors::OwoColorize;
use std::fmt::Write;

/// TextFormatter adapter rendering a human-readable, colored report.
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ScenarioReport) -> Result<String> {
        let mut out = String::new();
        writeln!(
            out,
            "Errata publish round-trip - repository {}",
            report.repository_id
        )?;
        writeln!(out)?;

        for outcome in &report.outcomes {
            match &outcome.status {
                CheckStatus::Passed => {
                    writeln!(out, "  {} {}", "✓".green(), outcome.name)?;
                }
                CheckStatus::Failed { reason } => {
                    writeln!(out, "  {} {}", "✗".red(), outcome.name.red())?;
                    for line in reason.lines() {
                        writeln!(out, "      {}", line)?;
                    }
                }
                CheckStatus::Skipped { reason } => {
                    writeln!(
                        out,
                        "  {} {} ({})",
                        "-".yellow(),
                        outcome.name.yellow(),
                        reason
                    )?;
                }
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{} passed, {} failed, {} skipped",
            report.passed_count(),
            report.failed_count(),
            report.skipped_count()
        )?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errata_publish::services::CheckOutcome;

    fn report() -> ScenarioReport {
        ScenarioReport::new(
            "repo-xyz".to_string(),
            vec![
                CheckOutcome::passed("updateinfo root element"),
                CheckOutcome::failed("description round-trip", "description was modified"),
                CheckOutcome::skipped("reboot_suggested omission", "known issue 1782 still open"),
            ],
        )
    }

    #[test]
    fn test_text_report_mentions_every_check() {
        let text = TextFormatter::new().format(&report()).unwrap();
        assert!(text.contains("updateinfo root element"));
        assert!(text.contains("description round-trip"));
        assert!(text.contains("reboot_suggested omission"));
        assert!(text.contains("repo-xyz"));
    }

    #[test]
    fn test_text_report_summary_line() {
        let text = TextFormatter::new().format(&report()).unwrap();
        assert!(text.contains("1 passed, 1 failed, 1 skipped"));
    }

    #[test]
    fn test_failure_reason_is_included() {
        let text = TextFormatter::new().format(&report()).unwrap();
        assert!(text.contains("description was modified"));
    }

    #[test]
    fn test_skip_reason_is_included() {
        let text = TextFormatter::new().format(&report()).unwrap();
        assert!(text.contains("known issue 1782 still open"));
    }
}
