//! MCP service exposing the tool gateway
//!
//! Thin `rmcp::ServerHandler` adapter: `tools/list` returns the gateway's
//! descriptor, `tools/call` runs the gateway and maps [`crate::GatewayError`]
//! onto protocol errors. Search failures are ordinary tool output.

use crate::gateway::ToolGateway;
use crate::web::{DuckDuckGoProvider, WebSearchProvider};
use crate::SearchError;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Implementation, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{RoleServer, ServerHandler};
use std::sync::Arc;
use tracing::{debug, info};
use websearch_config::SearchConfig;

/// Server name reported during initialization
pub const SERVER_NAME: &str = "web-search-mcp";

/// `search_web` MCP service
#[derive(Clone)]
pub struct WebSearchService {
    gateway: ToolGateway,
}

impl WebSearchService {
    /// Create a service in front of any provider
    #[must_use]
    pub fn new(provider: Arc<dyn WebSearchProvider>) -> Self {
        Self {
            gateway: ToolGateway::new(provider),
        }
    }

    /// Create a service backed by DuckDuckGo using the `[search]` configuration
    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        let provider = DuckDuckGoProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider)))
    }

    /// Gateway handling the tool calls
    #[must_use]
    pub fn gateway(&self) -> &ToolGateway {
        &self.gateway
    }

    /// Serve via stdio transport (stdin/stdout)
    ///
    /// Returns once the client closes the connection.
    pub async fn serve_stdio(self) -> Result<(), anyhow::Error> {
        use rmcp::transport::stdio;
        use rmcp::ServiceExt;

        let running = self.serve(stdio()).await?;
        info!("MCP server running on stdio");

        let reason = running.waiting().await?;
        info!("MCP session closed: {:?}", reason);
        Ok(())
    }
}

impl ServerHandler for WebSearchService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            instructions: Some(
                "Web search via the DuckDuckGo Instant Answer API. Call search_web with a \
                 query and an optional limit (1-10)."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::ErrorData> {
        let tools = ToolGateway::tools();
        debug!("Listing {} tools", tools.len());
        Ok(ListToolsResult::with_all_items(tools))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::ErrorData> {
        debug!("Calling tool: {}", request.name);
        self.gateway
            .call_tool(request.name.as_ref(), request.arguments.as_ref())
            .await
            .map_err(Into::into)
    }
}
