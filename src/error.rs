// Error types for the rss-mcp server.
// Covers feed fetching, feed parsing, and tool-argument failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RssMcpError {
    #[error("feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed fetch failed: {0}")]
    Fetch(String),

    #[error("feed parse error: {0}")]
    Parse(String),

    #[error("feed unavailable: no feed data has been fetched yet")]
    FeedUnavailable,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, RssMcpError>;
