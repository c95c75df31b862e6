use crate::ports::outbound::OutputPresenter;
use crate::shared::error::RoundtripError;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// StdoutPresenter adapter for writing the report to standard output.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, content: &str) -> Result<()> {
        println!("{}", content);
        Ok(())
    }
}

/// FileWriter adapter for writing the report to a file.
pub struct FileWriter {
    output_path: PathBuf,
}

impl FileWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(RoundtripError::ReportWrite {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for FileWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        fs::write(&self.output_path, content).map_err(|e| RoundtripError::ReportWrite {
            path: self.output_path.clone(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
