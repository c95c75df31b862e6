use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every check passed (or was skipped)
    Success = 0,
    /// One or more round-trip checks failed
    ChecksFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ChecksFailed => write!(f, "Checks Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the publish round-trip scenario.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum RoundtripError {
    #[error("API request failed: {method} {url}\nDetails: {details}\n\n💡 Hint: Check that the content server is reachable and the base URL is correct")]
    Api {
        method: String,
        url: String,
        details: String,
    },

    #[error("API returned status {status} for {method} {url}")]
    ApiStatus {
        method: String,
        url: String,
        status: u16,
    },

    #[error("Unexpected response shape from {url}\nDetails: {details}")]
    ResponseDecode { url: String, details: String },

    #[error("Failed to parse generated metadata: {details}")]
    Metadata { details: String },

    #[error("repomd.xml has no entry of type \"{data_type}\"")]
    RepomdEntryMissing { data_type: String },

    #[error("duplicate update id {id} in generated updateinfo.xml")]
    DuplicateUpdateId { id: String },

    #[error("Config file not found: {path}\n\n💡 Hint: Pass --config or create errata-roundtrip.toml in the working directory")]
    ConfigNotFound { path: PathBuf },

    #[error("Failed to read config file: {path}\nDetails: {details}")]
    ConfigRead { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains valid TOML syntax")]
    ConfigParse { path: PathBuf, details: String },

    /// Validation error for config contents
    #[error("Invalid config: {message}")]
    Validation { message: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWrite { path: PathBuf, details: String },
}
