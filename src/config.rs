// Runtime configuration.
// Reads the feed address and refresh TTL from the environment.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_TTL;

/// Feed polled when `RSS_URL` is not set.
pub const DEFAULT_FEED_URL: &str = "https://hnrss.org/frontpage";

/// Server configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address of the RSS feed to poll.
    pub feed_url: String,
    /// Maximum snapshot age before a refresh is attempted.
    pub ttl: Duration,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults.
    /// Unparseable values fall back rather than failing startup.
    pub fn from_env() -> Self {
        let feed_url = env::var("RSS_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
        let ttl = env::var("FEED_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TTL);

        Self { feed_url, ttl }
    }
}
