// Feed HTTP client.
// Fetches the RSS document over HTTP and hands the body to the parser.

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{Result, RssMcpError};

use super::parser::parse_feed;
use super::types::FeedItem;

/// A source of feed items.
///
/// The refresh coordinator only ever sees this trait: production uses
/// [`HttpFeedClient`], tests drive the coordinator with a mock.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch the latest batch of items, newest first.
    async fn fetch(&self) -> Result<Vec<FeedItem>>;
}

/// HTTP fetcher for a single RSS feed URL.
pub struct HttpFeedClient {
    client: Client,
    url: String,
}

impl HttpFeedClient {
    /// Create a client for the given feed URL.
    pub fn new(url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("rss-mcp"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(RssMcpError::Http)?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedClient {
    async fn fetch(&self) -> Result<Vec<FeedItem>> {
        log::debug!("fetching feed from {}", self.url);

        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RssMcpError::Fetch(format!(
                "HTTP {} from {}",
                status, self.url
            )));
        }

        let body = response.bytes().await?;
        let items = parse_feed(&body)?;
        log::debug!("parsed {} items from {}", items.len(), self.url);
        Ok(items)
    }
}
