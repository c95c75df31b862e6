use clap::Parser;

use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
use crate::ports::outbound::ReportFormatter;

#[derive(Debug, Clone, Copy)]
pub enum ReportFormat {
    Text,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl ReportFormat {
    /// Creates a formatter instance for the specified report format
    pub fn create_formatter(&self) -> Box<dyn ReportFormatter> {
        match self {
            ReportFormat::Text => Box::new(TextFormatter::new()),
            ReportFormat::Json => Box::new(JsonFormatter::new()),
        }
    }
}

/// Verify that errata survive a publish round trip on a Pulp-style content server
#[derive(Parser, Debug)]
#[command(name = "errata-roundtrip")]
#[command(version)]
#[command(about = "Verify that errata survive a publish round trip on a Pulp-style content server", long_about = None)]
pub struct Args {
    /// Report format: text or json
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,

    /// Server root URL (overrides the config file)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Path to a config file (defaults to ./errata-roundtrip.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Keep the created repository and distributor on the server
    #[arg(long)]
    pub keep: bool,

    /// Skip the known-issue tracker lookup; gated checks always run
    #[arg(long)]
    pub no_issue_check: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_report_format_from_str_text() {
        let format = ReportFormat::from_str("text").unwrap();
        assert!(matches!(format, ReportFormat::Text));
    }

    #[test]
    fn test_report_format_from_str_json() {
        let format = ReportFormat::from_str("json").unwrap();
        assert!(matches!(format, ReportFormat::Json));
    }

    #[test]
    fn test_report_format_case_insensitive() {
        assert!(matches!(
            ReportFormat::from_str("JSON").unwrap(),
            ReportFormat::Json
        ));
        assert!(matches!(
            ReportFormat::from_str("Text").unwrap(),
            ReportFormat::Text
        ));
    }

    #[test]
    fn test_report_format_from_str_invalid() {
        let result = ReportFormat::from_str("xml");
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.contains("Invalid format"));
        assert!(error.contains("text"));
        assert!(error.contains("json"));
    }

    #[test]
    fn test_report_format_from_str_empty() {
        assert!(ReportFormat::from_str("").is_err());
    }
}
