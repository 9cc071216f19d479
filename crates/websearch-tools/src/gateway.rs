//! Tool gateway
//!
//! Advertises the `search_web` tool and turns a raw tool invocation into a
//! search. Unknown tool names and bad queries are rejected here, before the
//! provider is touched.

use crate::error::GatewayError;
use crate::types::{SearchQuery, SearchResult, DEFAULT_LIMIT, MAX_LIMIT};
use crate::web::WebSearchProvider;
use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

/// Name of the only tool this server exposes
pub const TOOL_NAME: &str = "search_web";

const TOOL_DESCRIPTION: &str = "Search the internet and return summarized results. \
     Useful for recent information, technical documentation, and definitions.";

/// Routes tool invocations to a [`WebSearchProvider`]
#[derive(Clone)]
pub struct ToolGateway {
    provider: Arc<dyn WebSearchProvider>,
}

impl ToolGateway {
    /// Create a gateway in front of `provider`
    #[must_use]
    pub fn new(provider: Arc<dyn WebSearchProvider>) -> Self {
        Self { provider }
    }

    /// Tool descriptors for `tools/list`
    #[must_use]
    pub fn tools() -> Vec<Tool> {
        vec![Tool::new(
            TOOL_NAME,
            TOOL_DESCRIPTION,
            Arc::new(Self::input_schema()),
        )]
    }

    fn input_schema() -> JsonObject {
        let schema = json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "Search query string"
                },
                "limit": {
                    "type": "number",
                    "description": "Maximum number of results to return (default 5, max 10)",
                    "default": DEFAULT_LIMIT,
                    "minimum": 1,
                    "maximum": MAX_LIMIT
                }
            },
            "required": ["query"]
        });
        match schema {
            serde_json::Value::Object(map) => map,
            _ => JsonObject::new(),
        }
    }

    /// Validate and run one invocation, returning the search outcome
    pub async fn call(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<SearchResult, GatewayError> {
        if name != TOOL_NAME {
            return Err(GatewayError::UnknownTool(name.to_string()));
        }

        let query = SearchQuery::from_arguments(arguments)?;
        debug!("search_web query='{}' limit={}", query.query, query.limit);

        Ok(self.provider.search(&query.query, query.limit).await)
    }

    /// Run one invocation and wrap the pretty-printed result in a single
    /// text content block
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, GatewayError> {
        let result = self.call(name, arguments).await?;
        let text = result.to_pretty_json()?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}
