//! Wallpaper and tag models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::query::Resolution;

/// A wallpaper record.
///
/// Search listings omit `uploader` and `tags`; both are populated by the
/// detail endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wallpaper {
    /// Wallpaper ID (e.g. "94x38z").
    pub id: String,

    /// Page URL on wallhaven.cc.
    pub url: String,

    /// Short page URL.
    #[serde(default)]
    pub short_url: String,

    /// Uploading user, present on detail responses only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<Uploader>,

    /// View count.
    #[serde(default)]
    pub views: u64,

    /// Favorite count.
    #[serde(default)]
    pub favorites: u64,

    /// Source URL entered by the uploader, often empty.
    #[serde(default)]
    pub source: String,

    /// Purity rating: "sfw", "sketchy" or "nsfw".
    pub purity: String,

    /// Category: "general", "anime" or "people".
    pub category: String,

    /// Width in pixels.
    pub dimension_x: u32,

    /// Height in pixels.
    pub dimension_y: u32,

    /// Resolution as reported by the API, e.g. "1920x1080".
    pub resolution: String,

    /// Aspect ratio as a decimal string, e.g. "1.78".
    #[serde(default)]
    pub ratio: String,

    /// File size in bytes.
    #[serde(default)]
    pub file_size: u64,

    /// MIME type, e.g. "image/jpeg".
    #[serde(default)]
    pub file_type: String,

    /// Upload timestamp, "YYYY-MM-DD HH:MM:SS".
    #[serde(default)]
    pub created_at: String,

    /// Dominant color hex codes, with leading '#'.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Direct URL of the full-size image.
    pub path: String,

    /// Thumbnail URLs.
    #[serde(default)]
    pub thumbs: Thumbs,

    /// Tags, present on detail responses only.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Wallpaper {
    /// Pixel dimensions as a [`Resolution`].
    pub fn dimensions(&self) -> Resolution {
        Resolution::new(self.dimension_x, self.dimension_y)
    }

    /// File name portion of the full-size image URL.
    pub fn filename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Whether the wallpaper is rated safe-for-work.
    pub fn is_sfw(&self) -> bool {
        self.purity == "sfw"
    }

    /// Tag names joined by a separator.
    pub fn tags_string(&self, separator: &str) -> String {
        self.tags
            .iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Thumbnail URLs in the three sizes the API provides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Thumbs {
    /// Large thumbnail.
    #[serde(default)]
    pub large: String,
    /// Original-ratio thumbnail.
    #[serde(default)]
    pub original: String,
    /// Small thumbnail.
    #[serde(default)]
    pub small: String,
}

/// The user who uploaded a wallpaper.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Uploader {
    /// Username.
    pub username: String,
    /// User group, e.g. "User".
    #[serde(default)]
    pub group: String,
    /// Avatar URLs keyed by size ("128px", "32px", ...).
    #[serde(default)]
    pub avatar: HashMap<String, String>,
}

/// A tag attached to wallpapers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Tag {
    /// Numeric tag ID.
    pub id: u64,
    /// Tag name.
    pub name: String,
    /// Comma-separated aliases, may be empty.
    #[serde(default)]
    pub alias: String,
    /// ID of the tag category.
    #[serde(default)]
    pub category_id: u64,
    /// Name of the tag category.
    #[serde(default)]
    pub category: String,
    /// Purity rating of the tag itself.
    #[serde(default)]
    pub purity: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
}
