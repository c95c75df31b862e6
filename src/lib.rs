//! errata-roundtrip - publish round-trip verification for errata
//!
//! This library drives a Pulp-style content server through a full errata
//! publishing cycle and verifies that the generated `updateinfo.xml`
//! reproduces the submitted records faithfully. It follows hexagonal
//! architecture: the workflow and its checks are pure, and every external
//! system sits behind a port.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`errata_publish`): erratum records, task handles,
//!   parsed metadata trees, and the pure verification services
//! - **Application Layer** (`application`): the round-trip scenario use case
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Shared** (`shared`): common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use errata_roundtrip::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let api = PulpClient::new("https://pulp.example.com", None, true)?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case (no issue tracker configured)
//! let use_case: RunScenarioUseCase<_, (), _> =
//!     RunScenarioUseCase::new(api, None, progress_reporter);
//!
//! // Execute
//! let report = use_case.execute(ScenarioRequest::default())?;
//!
//! // Format output
//! let formatter = TextFormatter::new();
//! println!("{}", formatter.format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod errata_publish;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{FileWriter, StderrProgressReporter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::adapters::outbound::network::{PulpClient, RedmineClient};
    pub use crate::application::dto::{ScenarioReport, ScenarioRequest};
    pub use crate::application::use_cases::RunScenarioUseCase;
    pub use crate::errata_publish::domain::{
        Erratum, RepomdIndex, ScenarioFixture, Task, TaskState, UpdateinfoTree,
    };
    pub use crate::errata_publish::services::{verify_task, CheckOutcome, CheckStatus, TaskFailure};
    pub use crate::ports::outbound::{
        IssueTracker, OutputPresenter, ProgressReporter, RemoteApi, ReportFormatter,
    };
    pub use crate::shared::Result;
}
