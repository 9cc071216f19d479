//! Web search against the DuckDuckGo Instant Answer API
//!
//! - [`instant_answer`]: typed model of the API payload and the pure
//!   normalization into [`crate::SearchResultItem`]s
//! - [`search`]: the provider trait and the HTTP implementation
//!
//! ## Configuration
//!
//! The endpoint, timeout, and user agent come from the `[search]` table:
//!
//! ```toml
//! [search]
//! endpoint = "https://api.duckduckgo.com/"
//! timeout_secs = 30
//! ```

pub mod instant_answer;
pub mod search;

pub use instant_answer::{normalize, topic_title, InstantAnswer, Topic, TITLE_MAX_CHARS};
pub use search::{create_client, DuckDuckGoProvider, WebSearchProvider};
