//! Error types
//!
//! [`SearchError`] is internal to a single search and is folded into a
//! [`crate::SearchResult::Failure`]. [`GatewayError`] is raised to the RPC
//! caller before any search runs.

use rmcp::model::ErrorCode;
use thiserror::Error;

/// Errors that can occur while running one instant-answer query
#[derive(Error, Debug)]
pub enum SearchError {
    /// The provider answered with a non-2xx status
    #[error("HTTP {code}: {reason}")]
    Status {
        /// Numeric status code
        code: u16,
        /// Canonical reason phrase, empty for unregistered codes
        reason: String,
    },

    /// Connection, TLS, timeout, or body read failure, with its causes
    #[error("{}", with_sources(.0))]
    Request(#[from] reqwest::Error),

    /// The body was not a JSON object
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl SearchError {
    /// Build a status error from a response status
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode) -> Self {
        Self::Status {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}

/// `err` followed by every distinct message in its source chain
fn with_sources(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Errors raised by the tool gateway before the search function is reached
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The requested tool is not `search_web`
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// `query` is missing, not a string, or empty
    #[error("Invalid query: must be a non-empty string")]
    InvalidQuery,

    /// The search result could not be rendered as JSON
    #[error("failed to serialize search result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<GatewayError> for rmcp::ErrorData {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::UnknownTool(_) => {
                rmcp::ErrorData::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
            }
            GatewayError::InvalidQuery => rmcp::ErrorData::invalid_params(err.to_string(), None),
            GatewayError::Serialize(_) => rmcp::ErrorData::internal_error(err.to_string(), None),
        }
    }
}
