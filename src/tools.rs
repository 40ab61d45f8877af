// MCP tool surface.
// Routes tool calls through the refresh policy and the query engine.

use std::sync::Arc;
use std::time::Duration;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::{Deserialize, Serialize};

use crate::cache::{FeedCache, RefreshCoordinator};
use crate::config::Config;
use crate::feed::{FeedFetcher, FeedItem, HttpFeedClient};
use crate::query;

/// MCP service answering queries over the cached RSS feed.
#[derive(Clone)]
pub struct RssFeedService {
    cache: Arc<FeedCache>,
    coordinator: RefreshCoordinator,
    tool_router: ToolRouter<Self>,
}

impl RssFeedService {
    /// Build the production service from configuration.
    pub fn new(config: &Config) -> crate::error::Result<Self> {
        let fetcher = Arc::new(HttpFeedClient::new(&config.feed_url)?);
        Ok(Self::with_fetcher(fetcher, config.ttl))
    }

    fn with_fetcher(fetcher: Arc<dyn FeedFetcher>, ttl: Duration) -> Self {
        let cache = Arc::new(FeedCache::new());
        let coordinator = RefreshCoordinator::new(cache.clone(), fetcher, ttl);
        Self {
            cache,
            coordinator,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for RssFeedService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Query a cached RSS feed: 'get_latest_items' returns the newest entries, \
                 'search_items' matches a keyword against item titles and summaries."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetLatestItemsRequest {
    /// Maximum number of items to return (default 5).
    #[schemars(description = "Max items to return")]
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchItemsRequest {
    /// Keyword matched against item titles and summaries.
    #[schemars(description = "Case-insensitive keyword")]
    pub keyword: String,

    /// Maximum number of items to return (default 10).
    #[schemars(description = "Max items to return")]
    pub limit: Option<i64>,
}

/// Wire shape of a single item in tool results.
#[derive(Debug, Serialize)]
pub struct ItemPayload {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: String,
    #[serde(rename = "pubDate")]
    pub pub_date: Option<String>,
}

impl From<&FeedItem> for ItemPayload {
    fn from(item: &FeedItem) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone(),
            summary: item.summary_text().to_string(),
            pub_date: item.pub_date.clone(),
        }
    }
}

/// Serialize query results into a text content block.
fn render_items(items: &[&FeedItem]) -> CallToolResult {
    let payload: Vec<ItemPayload> = items.iter().copied().map(ItemPayload::from).collect();
    CallToolResult::success(vec![Content::text(
        serde_json::to_string_pretty(&payload).unwrap_or_default(),
    )])
}

#[tool_router]
impl RssFeedService {
    /// Most recent feed entries.
    #[tool(description = "Return the most recent items from the RSS feed.")]
    pub async fn get_latest_items(
        &self,
        Parameters(request): Parameters<GetLatestItemsRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.coordinator.ensure_fresh().await;
        let state = self.cache.read().await;
        match query::latest(state.snapshot.as_deref(), request.limit) {
            Ok(items) => Ok(render_items(&items)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }

    /// Keyword search over titles and summaries.
    #[tool(description = "Search items by keyword in title or summary.")]
    pub async fn search_items(
        &self,
        Parameters(request): Parameters<SearchItemsRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        self.coordinator.ensure_fresh().await;
        let state = self.cache.read().await;
        match query::search(
            state.snapshot.as_deref(),
            Some(request.keyword.as_str()),
            request.limit,
        ) {
            Ok(items) => Ok(render_items(&items)),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "Error: {e}"
            ))])),
        }
    }
}
