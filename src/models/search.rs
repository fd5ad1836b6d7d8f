//! Search result models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::wallpaper::Wallpaper;

/// One page of search (or collection listing) results.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    /// Wallpapers on this page, at most `meta.per_page` entries.
    pub data: Vec<Wallpaper>,

    /// Pagination metadata.
    pub meta: Meta,
}

impl SearchResults {
    /// Whether this page holds no results.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Pagination metadata returned alongside listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Meta {
    /// Current page (1-indexed).
    pub current_page: u32,

    /// Last available page.
    pub last_page: u32,

    /// Results per page.
    #[serde(default)]
    pub per_page: u32,

    /// Total number of matching wallpapers.
    #[serde(default)]
    pub total: u64,

    /// Echo of the query; a string for keyword searches, an object for
    /// tag-id searches, null otherwise. Passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Value>,

    /// Seed in effect for random sorting, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
}

impl Meta {
    /// Whether a further page of results exists.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.last_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_meta() {
        let meta: Meta = serde_json::from_value(serde_json::json!({
            "current_page": 1,
            "last_page": 12,
            "per_page": 24,
            "total": 286,
            "query": "nature",
            "seed": null
        }))
        .unwrap();
        assert_eq!(meta.per_page, 24);
        assert!(meta.has_next_page());
        assert_eq!(meta.query, Some(serde_json::json!("nature")));
    }

    #[test]
    fn test_last_page_has_no_next() {
        let meta = Meta {
            current_page: 3,
            last_page: 3,
            ..Default::default()
        };
        assert!(!meta.has_next_page());
    }
}
