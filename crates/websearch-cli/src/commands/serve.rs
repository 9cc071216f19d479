//! `serve`: run the MCP server on stdio

use anyhow::{Context, Result};
use tracing::{debug, info};
use websearch_config::WebSearchConfig;
use websearch_tools::WebSearchService;

/// Serve until the client disconnects
pub async fn execute(config: WebSearchConfig) -> Result<()> {
    info!("Starting web search MCP server v{}", websearch_tools::VERSION);
    debug!("Endpoint: {}", config.search.endpoint);

    let service = WebSearchService::from_config(&config.search)
        .context("Failed to create search service")?;

    service.serve_stdio().await
}
