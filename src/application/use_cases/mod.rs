mod run_scenario;

pub use run_scenario::RunScenarioUseCase;
