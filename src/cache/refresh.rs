// Refresh coordination.
// Decides when to fetch and ensures at most one fetch is in flight.

use std::sync::Arc;
use std::time::Duration;

use crate::feed::{FeedFetcher, FeedSnapshot};

use super::store::FeedCache;

/// Drives the fetch-on-demand policy in front of the cache.
///
/// `ensure_fresh` runs before every query. The caller that claims the
/// refresh slot fetches on behalf of everyone; all others proceed
/// immediately with whatever snapshot currently exists, which favors
/// availability over strict freshness. During a cold start this means
/// callers racing the very first fetch see no snapshot at all rather
/// than blocking on it.
#[derive(Clone)]
pub struct RefreshCoordinator {
    cache: Arc<FeedCache>,
    fetcher: Arc<dyn FeedFetcher>,
    ttl: Duration,
}

impl RefreshCoordinator {
    pub fn new(cache: Arc<FeedCache>, fetcher: Arc<dyn FeedFetcher>, ttl: Duration) -> Self {
        Self { cache, fetcher, ttl }
    }

    /// Refresh the cache if a refresh is due.
    ///
    /// Never fails: a fetch error is logged, the in-flight flag is cleared,
    /// and the existing snapshot survives untouched. Staleness is tolerated;
    /// total unavailability is only reported at query time.
    pub async fn ensure_fresh(&self) {
        if !self.cache.try_start_refresh(self.ttl).await {
            return;
        }

        match self.fetcher.fetch().await {
            Ok(items) => {
                log::debug!("feed refreshed: {} items", items.len());
                self.cache.commit(FeedSnapshot::new(items)).await;
            }
            Err(e) => {
                log::warn!("feed refresh failed: {e}");
                self.cache.mark_failed().await;
            }
        }
    }
}
