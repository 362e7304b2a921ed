//! HTTP access to the public npm registry.
//!
//! One blocking GET per operation, no retries: a failed call is surfaced to
//! the caller immediately as a [`RegistryError`] and the caller decides
//! whether it is fatal.

use crate::models::package::{PackageRecord, SearchResponse};
use std::time::Duration;
use thiserror::Error;
use ureq::Agent;

/// Base URL of the public registry.
pub const REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Default timeout applied to each registry call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Packuments of popular packages run to tens of megabytes, so the body
/// read needs a cap well above ureq's 10 MiB default.
const BODY_LIMIT: u64 = 64 * 1024 * 1024;

/// Failure taxonomy for registry calls.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The registry has no record under the requested name.
    #[error("package not found in the registry")]
    NotFound,

    /// The registry answered with a non-404 error status.
    #[error("registry returned HTTP status {0}")]
    Http(u16),

    /// Transport-level failure: DNS, connection, timeout, or body read.
    #[error("network error: {0}")]
    Network(String),

    /// A 2xx response whose body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    MalformedResponse(String),
}

/// Blocking client for the registry's package and search endpoints.
pub struct RegistryClient {
    agent: Agent,
    base_url: String,
}

impl RegistryClient {
    /// Builds a client with the given per-call timeout.
    ///
    /// Status errors are disabled on the agent so non-2xx responses come
    /// back as plain responses and the status can be branched on here.
    pub fn new(timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        Self {
            agent: config.new_agent(),
            base_url: REGISTRY_URL.to_string(),
        }
    }

    /// URL of a package record, the name interpolated verbatim.
    ///
    /// Scoped names (`@scope/name`) are left unencoded; the registry
    /// accepts that form.
    pub fn package_url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    /// Fetches and parses one package record.
    pub fn fetch_package(&self, name: &str) -> Result<PackageRecord, RegistryError> {
        let url = self.package_url(name);
        let body = read_success_body(self.agent.get(url.as_str()).call())?;
        serde_json::from_str(&body).map_err(|e| RegistryError::MalformedResponse(e.to_string()))
    }

    /// Asks the search endpoint for the names of the top `limit` packages,
    /// weighting quality, popularity, and maintenance equally.
    pub fn search_top_packages(&self, limit: usize) -> Result<Vec<String>, RegistryError> {
        let url = format!("{}/-/v1/search", self.base_url);
        let result = self
            .agent
            .get(url.as_str())
            .query("text", "keywords:popular")
            .query("size", &limit.to_string())
            .query("quality", "1.0")
            .query("popularity", "1.0")
            .query("maintenance", "1.0")
            .call();

        let body = read_success_body(result)?;
        let response: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| RegistryError::MalformedResponse(e.to_string()))?;

        Ok(response
            .objects
            .into_iter()
            .map(|entry| entry.package.name)
            .collect())
    }
}

/// Maps a finished call onto the failure taxonomy and reads the body of a
/// successful response.
fn read_success_body(
    result: Result<ureq::http::Response<ureq::Body>, ureq::Error>,
) -> Result<String, RegistryError> {
    let mut response = result.map_err(|e| RegistryError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    if status == 404 {
        return Err(RegistryError::NotFound);
    }
    if !(200..300).contains(&status) {
        return Err(RegistryError::Http(status));
    }

    response
        .body_mut()
        .with_config()
        .limit(BODY_LIMIT)
        .read_to_string()
        .map_err(|e| RegistryError::Network(e.to_string()))
}
