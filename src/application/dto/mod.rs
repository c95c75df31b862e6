mod scenario_report;
mod scenario_request;

pub use scenario_report::ScenarioReport;
pub use scenario_request::ScenarioRequest;
