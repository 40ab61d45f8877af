//! RSS MCP Server
//!
//! Serves query tools over a periodically-refreshed RSS feed via the MCP
//! protocol on stdio.
//!
//! ## Tools
//!
//! - `get_latest_items` - Return the most recent items from the feed
//! - `search_items` - Search items by keyword in title or summary
//!
//! ## Configuration
//!
//! - `RSS_URL` - feed address (default: https://hnrss.org/frontpage)
//! - `FEED_TTL_SECS` - snapshot TTL in seconds (default: 300)

use anyhow::Result;
use rmcp::ServiceExt;
use rmcp::transport::stdio;

mod cache;
mod config;
mod error;
mod feed;
mod query;
mod tools;

use config::Config;
use tools::RssFeedService;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr only; stdout carries the MCP protocol
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Config::from_env();
    log::info!(
        "starting RSS MCP server for {} (ttl {}s)",
        config.feed_url,
        config.ttl.as_secs()
    );

    let service = RssFeedService::new(&config)?;
    let server = service.serve(stdio()).await?;

    server.waiting().await?;

    log::info!("RSS MCP server stopped");
    Ok(())
}
