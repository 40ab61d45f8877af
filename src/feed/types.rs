// Feed data model.
// Defines the item and snapshot types captured from the RSS feed.

use chrono::{DateTime, Utc};

/// A single entry from the feed.
///
/// Every field is optional because real-world feeds omit elements freely.
/// Identity is positional within the snapshot that contains the item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedItem {
    /// Item title.
    pub title: Option<String>,
    /// Link to the full article.
    pub link: Option<String>,
    /// Short excerpt as delivered by the feed.
    pub description: Option<String>,
    /// Full content body (`content:encoded`).
    pub content: Option<String>,
    /// Publication timestamp, verbatim from the feed.
    pub pub_date: Option<String>,
}

impl FeedItem {
    /// Derived summary: the description when present and non-empty,
    /// else the content body, else empty.
    pub fn summary_text(&self) -> &str {
        self.description
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.content.as_deref())
            .unwrap_or("")
    }
}

/// The complete set of items captured by one successful fetch.
///
/// Immutable once captured; replaced wholesale on the next successful
/// refresh, never mutated in place.
#[derive(Debug, Clone)]
pub struct FeedSnapshot {
    /// Items in feed order (newest first).
    pub items: Vec<FeedItem>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
}

impl FeedSnapshot {
    /// Capture a snapshot of the given items, stamped with the current time.
    pub fn new(items: Vec<FeedItem>) -> Self {
        Self {
            items,
            fetched_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prefers_description() {
        let item = FeedItem {
            description: Some("excerpt".to_string()),
            content: Some("full body".to_string()),
            ..Default::default()
        };
        assert_eq!(item.summary_text(), "excerpt");
    }

    #[test]
    fn test_summary_falls_back_to_content() {
        let item = FeedItem {
            content: Some("full body".to_string()),
            ..Default::default()
        };
        assert_eq!(item.summary_text(), "full body");

        // An empty description counts as absent
        let item = FeedItem {
            description: Some(String::new()),
            content: Some("full body".to_string()),
            ..Default::default()
        };
        assert_eq!(item.summary_text(), "full body");
    }

    #[test]
    fn test_summary_empty_when_nothing_present() {
        assert_eq!(FeedItem::default().summary_text(), "");
    }
}
