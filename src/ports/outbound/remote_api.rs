use crate::errata_publish::domain::Task;
use crate::shared::Result;
use serde_json::Value;

/// RemoteApi port for the content server's resource-oriented HTTP API.
///
/// All calls are synchronous and block until a response is received. Paths
/// are either relative to the server root (e.g. `pulp/api/v2/repositories/`)
/// or server-absolute hrefs as returned by the API itself; the adapter joins
/// them with its configured base URL. Non-success HTTP statuses are raised as
/// errors, never decoded.
pub trait RemoteApi {
    /// POST a JSON body, returning the decoded response body.
    fn post(&self, path: &str, body: &Value) -> Result<Value>;

    /// GET a JSON resource.
    fn get_json(&self, path: &str) -> Result<Value>;

    /// GET a raw resource (published metadata files, possibly gzipped).
    fn get_bytes(&self, path: &str) -> Result<Vec<u8>>;

    /// DELETE a resource. Used by teardown only.
    fn delete(&self, path: &str) -> Result<()>;

    /// Fetch the task at `href`, blocking until it reaches a terminal state.
    ///
    /// Polling until terminal is this collaborator's responsibility; callers
    /// never see an in-flight task. There is deliberately no timeout: a hang
    /// in the remote system manifests as a hang in the scenario.
    fn wait_task(&self, href: &str) -> Result<Task>;
}
