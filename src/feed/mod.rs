// Feed module.
// Fetcher trait, HTTP client, XML parsing, and item types for the RSS feed.

pub mod client;
pub mod parser;
pub mod types;

pub use client::{FeedFetcher, HttpFeedClient};
pub use types::{FeedItem, FeedSnapshot};
