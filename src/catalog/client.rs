//! Outbound client for the product search API.

use super::models::SearchResponse;
use crate::config::SearchConfig;
use thiserror::Error;

/// Failures of a single search call.
///
/// None of these are fatal to the process; tool handlers render them as a
/// failed-search text block.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Google API key or Search Engine ID not configured")]
    MissingCredentials,

    #[error("failed to make search request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("search API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Thin wrapper over a shared `reqwest::Client` carrying the credentials.
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    /// Creates a client for the configured endpoint.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Runs one catalog query and decodes the response.
    ///
    /// No retries: the first failure is surfaced as-is to the caller.
    pub async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<SearchResponse, SearchError> {
        if !self.config.is_configured() {
            return Err(SearchError::MissingCredentials);
        }

        tracing::debug!(query, num_results, "requesting product search");

        let num = num_results.to_string();
        let response = self
            .http
            .get(&self.config.endpoint)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("cx", self.config.engine_id.as_str()),
                ("q", query),
                ("num", num.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(%status, "search API responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status { status, body });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
