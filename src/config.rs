//! Environment-backed configuration for the search collaborator.

use std::env;

/// Default endpoint of the Google Custom Search JSON API.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";

/// Credentials and endpoint for the product search API.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Google API key (`GOOGLE_API_KEY`).
    pub api_key: String,

    /// Custom Search engine identifier (`GOOGLE_SEARCH_ENGINE_ID`).
    pub engine_id: String,

    /// Base URL the search requests are sent to.
    pub endpoint: String,
}

impl SearchConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Missing variables yield empty strings; the client reports them as a
    /// failed search on first use instead of refusing to start.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("GOOGLE_API_KEY").unwrap_or_default(),
            engine_id: env::var("GOOGLE_SEARCH_ENGINE_ID").unwrap_or_default(),
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
        }
    }

    /// True when both credentials are present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.engine_id.is_empty()
    }
}
