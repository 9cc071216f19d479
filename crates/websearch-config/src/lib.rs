//! # websearch configuration
//!
//! Typed configuration for the websearch MCP server.
//!
//! Values are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. TOML file (`--config <path>` or `<config_dir>/websearch-mcp/config.toml`)
//! 3. Environment variables (`WEBSEARCH_ENDPOINT`, `WEBSEARCH_TIMEOUT_SECS`,
//!    `WEBSEARCH_USER_AGENT`)
//! 4. Command-line flags, applied by the binary
//!
//! ```rust,no_run
//! use websearch_config::WebSearchConfig;
//!
//! let config = WebSearchConfig::load(None)?;
//! println!("endpoint: {}", config.search.endpoint);
//! # Ok::<(), websearch_config::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod components;
mod config;

pub use components::*;
pub use config::*;
