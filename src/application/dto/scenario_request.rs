/// ScenarioRequest - Internal request DTO for the round-trip scenario
///
/// This DTO represents the internal request structure used within
/// the application layer. It may differ from the external CLI surface.
#[derive(Debug, Clone)]
pub struct ScenarioRequest {
    /// Keep the created repository and distributor on the server for
    /// post-mortem inspection instead of deleting them at teardown.
    pub keep_resources: bool,
    /// Known issue to consult before the reboot_suggested omission check;
    /// None disables the lookup and the check always runs.
    pub known_issue: Option<u32>,
}

impl ScenarioRequest {
    pub fn new(keep_resources: bool, known_issue: Option<u32>) -> Self {
        Self {
            keep_resources,
            known_issue,
        }
    }
}

impl Default for ScenarioRequest {
    fn default() -> Self {
        Self::new(false, None)
    }
}
