// Query engine.
// Pure, deterministic views over the current feed snapshot.

use crate::error::{Result, RssMcpError};
use crate::feed::{FeedItem, FeedSnapshot};

/// Default number of items returned by `latest`.
pub const DEFAULT_LATEST_LIMIT: usize = 5;

/// Default number of items returned by `search`.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Clamp a wire-side limit to a usable count; negative values become zero.
fn effective_limit(limit: Option<i64>, default: usize) -> usize {
    match limit {
        Some(n) => usize::try_from(n).unwrap_or(0),
        None => default,
    }
}

/// The first `limit` items of the snapshot, in snapshot order.
///
/// The fetcher delivers items newest first and nothing here re-sorts them.
/// Fails with `FeedUnavailable` when no snapshot has ever been captured,
/// which is distinct from a feed that currently has zero items.
pub fn latest<'a>(
    snapshot: Option<&'a FeedSnapshot>,
    limit: Option<i64>,
) -> Result<Vec<&'a FeedItem>> {
    let snapshot = snapshot.ok_or(RssMcpError::FeedUnavailable)?;
    let limit = effective_limit(limit, DEFAULT_LATEST_LIMIT);
    Ok(snapshot.items.iter().take(limit).collect())
}

/// Items whose title or summary contains `keyword` case-insensitively,
/// in snapshot order, truncated to `limit`.
///
/// The keyword is required; an empty keyword matches every item. The
/// argument check runs before the snapshot check, so malformed input is
/// reported even while the feed is unavailable.
pub fn search<'a>(
    snapshot: Option<&'a FeedSnapshot>,
    keyword: Option<&str>,
    limit: Option<i64>,
) -> Result<Vec<&'a FeedItem>> {
    let keyword = keyword
        .ok_or_else(|| RssMcpError::InvalidArgument("keyword is required".to_string()))?;
    let snapshot = snapshot.ok_or(RssMcpError::FeedUnavailable)?;
    let limit = effective_limit(limit, DEFAULT_SEARCH_LIMIT);
    let needle = keyword.to_lowercase();

    Ok(snapshot
        .items
        .iter()
        .filter(|item| {
            item.title
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(&needle))
                || item.summary_text().to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect())
}
