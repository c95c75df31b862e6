use errata_roundtrip::adapters::outbound::console::{
    FileWriter, StderrProgressReporter, StdoutPresenter,
};
use errata_roundtrip::adapters::outbound::network::{PulpClient, RedmineClient};
use errata_roundtrip::application::dto::ScenarioRequest;
use errata_roundtrip::application::use_cases::RunScenarioUseCase;
use errata_roundtrip::cli::Args;
use errata_roundtrip::config::{self, ConfigFile, DEFAULT_KNOWN_ISSUE};
use errata_roundtrip::ports::outbound::OutputPresenter;
use errata_roundtrip::shared::error::{ExitCode, RoundtripError};
use errata_roundtrip::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    match run() {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run() -> Result<ExitCode> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration (explicit path, or discovery in the working directory)
    let config = match &args.config {
        Some(path) => config::load_config_from_path(Path::new(path))?,
        None => config::discover_config(Path::new("."))?.unwrap_or_default(),
    };

    let base_url = resolve_base_url(&args, &config)?;
    let auth = match (&config.username, &config.password) {
        (Some(user), Some(password)) => Some((user.clone(), password.clone())),
        _ => None,
    };

    // Create adapters (Dependency Injection)
    let api = PulpClient::new(&base_url, auth, config.verify_tls.unwrap_or(true))?;
    let progress_reporter = StderrProgressReporter::new();
    let issue_tracker = match (&config.issue_tracker_url, args.no_issue_check) {
        (Some(url), false) => Some(RedmineClient::new(url)?),
        _ => None,
    };

    // Create use case with injected dependencies
    let use_case = RunScenarioUseCase::new(api, issue_tracker, progress_reporter);

    // Execute the round-trip scenario
    let request = ScenarioRequest::new(args.keep, Some(DEFAULT_KNOWN_ISSUE));
    let report = use_case.execute(request)?;

    // Format and present the report
    let formatter = args.format.create_formatter();
    let rendered = formatter.format(&report)?;

    let presenter: Box<dyn OutputPresenter> = match &args.output {
        Some(output_path) => Box::new(FileWriter::new(PathBuf::from(output_path))),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&rendered)?;

    if report.has_failures() {
        Ok(ExitCode::ChecksFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

fn resolve_base_url(args: &Args, config: &ConfigFile) -> Result<String> {
    args.base_url
        .clone()
        .or_else(|| config.base_url.clone())
        .ok_or_else(|| {
            RoundtripError::Validation {
                message: "no server base URL given; pass --base-url or set base_url in the config file"
                    .to_string(),
            }
            .into()
        })
}
