//! Upstream page retrieval.

use reqwest::Url;
use tracing::{debug, warn};

use crate::config::AnalyzerConfig;
use crate::error::{AuditError, AuditResult};

/// Message returned when a request carries no URL.
pub const URL_REQUIRED: &str = "URL is required";

/// Check that `url` is present and is an absolute http(s) URL.
pub fn validate_url(url: Option<&str>) -> AuditResult<Url> {
    let raw = url
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| AuditError::validation(URL_REQUIRED))?;

    let parsed =
        Url::parse(raw).map_err(|e| AuditError::validation(format!("Invalid URL: {e}")))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(AuditError::validation(format!(
            "Invalid URL: unsupported scheme '{other}'"
        ))),
    }
}

/// Fetches raw HTML over HTTP.
#[derive(Clone)]
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new(config: &AnalyzerConfig) -> AuditResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AuditError::config(format!("cannot build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// GET `url` and return its body as text.
    ///
    /// Transport failures and non-success statuses become
    /// [`AuditError::Fetch`] carrying the status text.
    pub async fn fetch(&self, url: &Url) -> AuditResult<String> {
        debug!(url = %url, "Fetching document");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| AuditError::fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status.canonical_reason().unwrap_or(status.as_str());
            warn!(url = %url, status_code = %status, "Upstream returned non-success status");
            return Err(AuditError::fetch(status_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AuditError::unexpected(format!("Failed to read response body: {e}")))?;

        debug!(url = %url, bytes = body.len(), "Fetched document");
        Ok(body)
    }
}
