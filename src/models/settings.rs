//! Account settings model.

use serde::{Deserialize, Serialize};

/// Browsing settings of the authenticated account.
///
/// The API reports several numeric settings as strings; they are passed
/// through as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    /// Preferred thumbnail size, e.g. "orig".
    #[serde(default)]
    pub thumb_size: String,

    /// Results per page, as a string (e.g. "24").
    #[serde(default)]
    pub per_page: String,

    /// Enabled purity filters.
    #[serde(default)]
    pub purity: Vec<String>,

    /// Enabled categories.
    #[serde(default)]
    pub categories: Vec<String>,

    /// Preferred exact resolutions.
    #[serde(default)]
    pub resolutions: Vec<String>,

    /// Preferred aspect ratios.
    #[serde(default)]
    pub aspect_ratios: Vec<String>,

    /// Default toplist window, e.g. "1M".
    #[serde(default)]
    pub toplist_range: String,

    /// Tags hidden from results.
    #[serde(default)]
    pub tag_blacklist: Vec<String>,

    /// Users hidden from results.
    #[serde(default)]
    pub user_blacklist: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_settings() {
        let settings: UserSettings = serde_json::from_value(serde_json::json!({
            "thumb_size": "orig",
            "per_page": "24",
            "purity": ["sfw"],
            "categories": ["general", "anime"],
            "resolutions": [],
            "aspect_ratios": ["16x9"],
            "toplist_range": "1M",
            "tag_blacklist": [],
            "user_blacklist": []
        }))
        .unwrap();
        assert_eq!(settings.per_page, "24");
        assert_eq!(settings.categories, vec!["general", "anime"]);
    }
}
