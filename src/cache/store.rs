// In-memory cache for the feed snapshot.
// Sole source of truth for the snapshot, freshness, and the in-flight flag.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::feed::FeedSnapshot;

/// Default TTL before a snapshot is considered stale: 5 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache state as observed by any caller.
#[derive(Debug, Clone, Default)]
pub struct CacheState {
    /// Most recent successfully fetched snapshot, if any.
    pub snapshot: Option<Arc<FeedSnapshot>>,
    /// Completion time of the last successful fetch.
    pub last_success_at: Option<DateTime<Utc>>,
    /// Whether a fetch is currently outstanding.
    pub refresh_in_flight: bool,
}

impl CacheState {
    /// Whether a refresh is due at `now`: no success yet, or the last
    /// success is at least `ttl` old.
    pub fn refresh_due(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        match self.last_success_at {
            None => true,
            Some(last) => {
                let elapsed = now
                    .signed_duration_since(last)
                    .to_std()
                    .unwrap_or(Duration::MAX);
                elapsed >= ttl
            }
        }
    }
}

/// Process-wide cache, created empty at startup and mutated only through
/// the operations below. Each operation takes the lock for a short,
/// await-free critical section, so no reader observes a half-updated state.
#[derive(Debug, Default)]
pub struct FeedCache {
    state: Mutex<CacheState>,
}

impl FeedCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state, cloned out of the critical section.
    pub async fn read(&self) -> CacheState {
        self.state.lock().await.clone()
    }

    /// Claim the refresh slot if a refresh is due and none is outstanding.
    ///
    /// The due-check and the in-flight flag share one critical section, so
    /// concurrent callers that all observe a due refresh elect exactly one
    /// leader.
    pub async fn try_start_refresh(&self, ttl: Duration) -> bool {
        let mut state = self.state.lock().await;
        if state.refresh_in_flight || !state.refresh_due(ttl, Utc::now()) {
            return false;
        }
        state.refresh_in_flight = true;
        true
    }

    /// Install a freshly fetched snapshot and clear the in-flight flag.
    ///
    /// A snapshot older than the current `last_success_at` is discarded, so
    /// the timestamp stays monotonically non-decreasing even if leadership
    /// windows were ever to overlap.
    pub async fn commit(&self, snapshot: FeedSnapshot) {
        let mut state = self.state.lock().await;
        state.refresh_in_flight = false;
        if let Some(last) = state.last_success_at {
            if snapshot.fetched_at < last {
                return;
            }
        }
        state.last_success_at = Some(snapshot.fetched_at);
        state.snapshot = Some(Arc::new(snapshot));
    }

    /// Record a failed fetch: clear the in-flight flag, keep the snapshot.
    pub async fn mark_failed(&self) {
        let mut state = self.state.lock().await;
        state.refresh_in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedItem;

    fn snapshot_with_title(title: &str, fetched_at: DateTime<Utc>) -> FeedSnapshot {
        FeedSnapshot {
            items: vec![FeedItem {
                title: Some(title.to_string()),
                ..Default::default()
            }],
            fetched_at,
        }
    }

    #[test]
    fn test_empty_state_is_due() {
        let state = CacheState::default();
        assert!(state.refresh_due(DEFAULT_TTL, Utc::now()));
    }

    #[test]
    fn test_fresh_state_not_due() {
        let now = Utc::now();
        let state = CacheState {
            last_success_at: Some(now - chrono::Duration::seconds(10)),
            ..Default::default()
        };
        assert!(!state.refresh_due(Duration::from_secs(300), now));
    }

    #[test]
    fn test_due_at_exact_ttl_boundary() {
        let now = Utc::now();
        let state = CacheState {
            last_success_at: Some(now - chrono::Duration::seconds(300)),
            ..Default::default()
        };
        assert!(state.refresh_due(Duration::from_secs(300), now));
    }

    #[tokio::test]
    async fn test_refresh_slot_claimed_once() {
        let cache = FeedCache::new();
        assert!(cache.try_start_refresh(DEFAULT_TTL).await);
        // Second caller sees the in-flight fetch and backs off
        assert!(!cache.try_start_refresh(DEFAULT_TTL).await);
    }

    #[tokio::test]
    async fn test_commit_stores_snapshot_and_clears_flag() {
        let cache = FeedCache::new();
        assert!(cache.try_start_refresh(DEFAULT_TTL).await);
        cache.commit(snapshot_with_title("hello", Utc::now())).await;

        let state = cache.read().await;
        assert!(!state.refresh_in_flight);
        assert!(state.last_success_at.is_some());
        let snapshot = state.snapshot.unwrap();
        assert_eq!(snapshot.items[0].title.as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn test_mark_failed_preserves_snapshot() {
        let cache = FeedCache::new();
        cache.commit(snapshot_with_title("kept", Utc::now())).await;

        assert!(cache.try_start_refresh(Duration::ZERO).await);
        cache.mark_failed().await;

        let state = cache.read().await;
        assert!(!state.refresh_in_flight);
        assert_eq!(
            state.snapshot.unwrap().items[0].title.as_deref(),
            Some("kept")
        );
    }

    #[tokio::test]
    async fn test_commit_ignores_older_snapshot() {
        let cache = FeedCache::new();
        let now = Utc::now();
        cache.commit(snapshot_with_title("newer", now)).await;
        cache
            .commit(snapshot_with_title(
                "stale",
                now - chrono::Duration::seconds(60),
            ))
            .await;

        let state = cache.read().await;
        assert_eq!(state.last_success_at, Some(now));
        assert_eq!(
            state.snapshot.unwrap().items[0].title.as_deref(),
            Some("newer")
        );
    }
}
