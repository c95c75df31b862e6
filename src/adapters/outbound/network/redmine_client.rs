use crate::ports::outbound::IssueTracker;
use crate::shared::error::RoundtripError;
use crate::shared::Result;
use dashmap::DashMap;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct IssueEnvelope {
    issue: IssueBody,
}

#[derive(Debug, Deserialize)]
struct IssueBody {
    status: IssueStatus,
}

#[derive(Debug, Deserialize)]
struct IssueStatus {
    name: String,
}

/// RedmineClient adapter for known-issue lookups against a Redmine-style
/// issue tracker.
///
/// Implements the IssueTracker port over the tracker's JSON API
/// (`GET <root>/issues/<id>.json`). Results are cached in-memory so a check
/// suite consulting the same issue repeatedly hits the network once.
///
/// # Caching
/// Caching is an adapter-layer concern: the domain only asks whether an
/// issue is unresolved, not where the answer came from.
pub struct RedmineClient {
    client: Client,
    tracker_root: String,
    cache: Arc<DashMap<u32, bool>>,
}

impl RedmineClient {
    const TIMEOUT_SECONDS: u64 = 10;

    /// Statuses that count as resolved; anything else keeps the issue open.
    const RESOLVED_STATUSES: [&'static str; 3] = ["Closed", "Resolved", "Rejected"];

    pub fn new(tracker_root: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("errata-roundtrip/{}", version);
        let client = Client::builder()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            tracker_root: tracker_root.trim_end_matches('/').to_string(),
            cache: Arc::new(DashMap::new()),
        })
    }

    /// Returns the current cache size (for testing/monitoring)
    #[cfg(test)]
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn fetch_status(&self, issue_id: u32) -> Result<String> {
        let url = format!(
            "{}/issues/{}.json",
            self.tracker_root,
            urlencoding::encode(&issue_id.to_string())
        );
        let response = self.client.get(&url).send().map_err(|e| RoundtripError::Api {
            method: "GET".to_string(),
            url: url.clone(),
            details: e.to_string(),
        })?;

        if !response.status().is_success() {
            return Err(RoundtripError::ApiStatus {
                method: "GET".to_string(),
                url,
                status: response.status().as_u16(),
            }
            .into());
        }

        let envelope: IssueEnvelope = response.json().map_err(|e| RoundtripError::ResponseDecode {
            url,
            details: e.to_string(),
        })?;
        Ok(envelope.issue.status.name)
    }
}

impl IssueTracker for RedmineClient {
    fn is_unresolved(&self, issue_id: u32) -> Result<bool> {
        if let Some(cached) = self.cache.get(&issue_id) {
            return Ok(*cached);
        }

        let status = self.fetch_status(issue_id)?;
        let unresolved = !Self::RESOLVED_STATUSES.contains(&status.as_str());
        self.cache.insert(issue_id, unresolved);
        Ok(unresolved)
    }
}
