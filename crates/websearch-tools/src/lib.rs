//! websearch tools - a single `search_web` MCP tool backed by DuckDuckGo
//!
//! The crate is layered bottom-up:
//!
//! - [`types`]: the uniform result shape handed back to agents
//! - [`web`]: the instant-answer payload model, its normalization, and the
//!   HTTP provider that runs one query
//! - [`gateway`]: tool listing and argument validation in front of the provider
//! - [`server`]: the `rmcp` service that exposes the gateway over stdio
//!
//! Search failures never surface as errors: they come back as a
//! [`SearchResult::Failure`] value so callers always get the same JSON shape.
//! Only argument validation in the gateway produces protocol-level errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod gateway;
pub mod server;
pub mod types;
pub mod web;

pub use error::{GatewayError, SearchError};
pub use gateway::{ToolGateway, TOOL_NAME};
pub use server::WebSearchService;
pub use types::{SearchQuery, SearchResult, SearchResultItem, DEFAULT_LIMIT, MAX_LIMIT};
pub use web::{normalize, DuckDuckGoProvider, InstantAnswer, WebSearchProvider};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
