//! Search provider configuration
//!
//! Controls where the instant-answer query is sent and how the HTTP client
//! behaves. No API key is ever required.

use serde::{Deserialize, Serialize};

/// Default instant-answer endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.duckduckgo.com/";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Search provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Base URL of the instant-answer API
    pub endpoint: String,

    /// Whole-request timeout. `None` or `0` leaves the request without a deadline.
    pub timeout_secs: Option<u64>,

    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("websearch-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
