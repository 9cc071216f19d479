//! Web search provider trait and the DuckDuckGo implementation

use super::instant_answer::{normalize, InstantAnswer};
use crate::error::SearchError;
use crate::types::SearchResult;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use websearch_config::SearchConfig;

/// Trait for web search providers
///
/// Implementations never fail: transport and parse problems are returned as
/// [`SearchResult::Failure`].
#[async_trait]
pub trait WebSearchProvider: Send + Sync {
    /// Run one query and return at most `limit` normalized results (plus the
    /// abstract, which is not counted against the limit)
    async fn search(&self, query: &str, limit: i64) -> SearchResult;
}

/// Build the shared HTTP client from configuration
///
/// A timeout of `0` means no timeout, whether it came from the config file or
/// the environment.
pub fn create_client(config: &SearchConfig) -> Result<Client, SearchError> {
    let mut builder = Client::builder().user_agent(config.user_agent.as_str());
    if let Some(secs) = config.timeout_secs.filter(|secs| *secs > 0) {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| SearchError::Client(e.to_string()))
}

/// DuckDuckGo Instant Answer provider
///
/// Sends exactly one GET per search, with no retries and no caching.
#[derive(Clone)]
pub struct DuckDuckGoProvider {
    client: Client,
    endpoint: String,
}

impl DuckDuckGoProvider {
    /// Create a provider for `endpoint` using an existing client
    #[must_use]
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a provider from the `[search]` configuration
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self::new(create_client(config)?, config.endpoint.clone()))
    }

    /// Endpoint this provider queries
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Full request URL with the fixed instant-answer parameters
    #[must_use]
    pub fn request_url(&self, query: &str) -> String {
        format!(
            "{}?q={}&format=json&no_html=1&skip_disambig=1",
            self.endpoint,
            urlencoding::encode(query)
        )
    }

    /// Fetch and decode the raw payload
    pub async fn fetch(&self, query: &str) -> Result<InstantAnswer, SearchError> {
        let url = self.request_url(query);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::from_status(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Search and normalize, folding every failure into the result value
    pub async fn search_web(&self, query: &str, limit: i64) -> SearchResult {
        match self.fetch(query).await {
            Ok(answer) => {
                let items = normalize(answer, limit);
                debug!("Query '{}' produced {} results", query, items.len());
                SearchResult::success(query, items)
            }
            Err(e) => {
                warn!("Search for '{}' failed: {}", query, e);
                SearchResult::failure(query, e.to_string())
            }
        }
    }
}

#[async_trait]
impl WebSearchProvider for DuckDuckGoProvider {
    async fn search(&self, query: &str, limit: i64) -> SearchResult {
        self.search_web(query, limit).await
    }
}
