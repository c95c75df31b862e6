use crate::errata_publish::domain::Task;
use crate::ports::outbound::RemoteApi;
use crate::shared::error::RoundtripError;
use crate::shared::Result;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;

/// PulpClient adapter for the content server's REST API.
///
/// Implements the RemoteApi port over a blocking reqwest client. Each
/// request blocks until a response is received; non-success statuses become
/// errors and are never decoded. Task polling lives here - callers receive
/// only terminal tasks.
///
/// # Security
/// - Per-request timeout (30 seconds)
/// - Optional basic auth from configuration
/// - No retry of failed requests (fail fast so setup failures surface)
pub struct PulpClient {
    client: Client,
    base_url: String,
    auth: Option<(String, String)>,
    poll_interval: Duration,
}

impl PulpClient {
    const TIMEOUT_SECONDS: u64 = 30;
    const POLL_INTERVAL_MS: u64 = 500;

    /// Creates a new client for the given server root URL
    /// (e.g. `https://pulp.example.com`).
    pub fn new(base_url: &str, auth: Option<(String, String)>, verify_tls: bool) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("errata-roundtrip/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .danger_accept_invalid_certs(!verify_tls)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
            poll_interval: Duration::from_millis(Self::POLL_INTERVAL_MS),
        })
    }

    /// Joins a path with the configured base URL.
    ///
    /// Absolute URLs pass through untouched; server-absolute hrefs (as the
    /// API returns them) and root-relative paths are both anchored at the
    /// server root.
    pub fn join_url(base_url: &str, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn url(&self, path: &str) -> String {
        Self::join_url(&self.base_url, path)
    }

    fn apply_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Some((user, password)) => request.basic_auth(user, Some(password)),
            None => request,
        }
    }

    fn send_checked(&self, method: &str, url: &str, request: RequestBuilder) -> Result<Response> {
        let response = self
            .apply_auth(request)
            .send()
            .map_err(|e| RoundtripError::Api {
                method: method.to_string(),
                url: url.to_string(),
                details: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(RoundtripError::ApiStatus {
                method: method.to_string(),
                url: url.to_string(),
                status: response.status().as_u16(),
            }
            .into());
        }
        Ok(response)
    }

    fn decode_json(url: &str, response: Response) -> Result<Value> {
        response
            .json()
            .map_err(|e| {
                RoundtripError::ResponseDecode {
                    url: url.to_string(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl RemoteApi for PulpClient {
    fn post(&self, path: &str, body: &Value) -> Result<Value> {
        let url = self.url(path);
        let response = self.send_checked("POST", &url, self.client.post(&url).json(body))?;
        Self::decode_json(&url, response)
    }

    fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url(path);
        let response = self.send_checked("GET", &url, self.client.get(&url))?;
        Self::decode_json(&url, response)
    }

    fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.url(path);
        let response = self.send_checked("GET", &url, self.client.get(&url))?;
        let bytes = response.bytes().map_err(|e| RoundtripError::Api {
            method: "GET".to_string(),
            url: url.clone(),
            details: e.to_string(),
        })?;
        Ok(bytes.to_vec())
    }

    fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        self.send_checked("DELETE", &url, self.client.delete(&url))?;
        Ok(())
    }

    /// Blocks until the task at `href` reaches a terminal state.
    ///
    /// There is deliberately no overall timeout here: a hang in the remote
    /// system manifests as a hang in the scenario, which is the documented
    /// contract.
    fn wait_task(&self, href: &str) -> Result<Task> {
        loop {
            let url = self.url(href);
            let body = self.get_json(href)?;
            let task: Task =
                serde_json::from_value(body).map_err(|e| RoundtripError::ResponseDecode {
                    url,
                    details: e.to_string(),
                })?;
            if task.state.is_terminal() {
                return Ok(task);
            }
            std::thread::sleep(self.poll_interval);
        }
    }
}
