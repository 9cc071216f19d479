//! `search`: one-shot query from the command line

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::sync::Arc;
use websearch_config::WebSearchConfig;
use websearch_tools::{DuckDuckGoProvider, ToolGateway, TOOL_NAME};

/// Build the tool arguments the same way an MCP client would send them
pub fn arguments(query: &str, limit: Option<i64>) -> Map<String, Value> {
    let mut args = Map::new();
    args.insert("query".to_string(), Value::from(query));
    if let Some(limit) = limit {
        args.insert("limit".to_string(), Value::from(limit));
    }
    args
}

/// Run the query through the gateway and print the pretty JSON result
pub async fn execute(config: WebSearchConfig, query: String, limit: Option<i64>) -> Result<()> {
    let provider = DuckDuckGoProvider::from_config(&config.search)
        .context("Failed to create search provider")?;
    let gateway = ToolGateway::new(Arc::new(provider));

    let result = gateway.call(TOOL_NAME, Some(&arguments(&query, limit))).await?;
    println!("{}", result.to_pretty_json()?);
    Ok(())
}
