//! Collection models.

use serde::{Deserialize, Serialize};

/// A user collection (favorites folder).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    /// Numeric collection ID.
    pub id: u64,

    /// Collection label.
    pub label: String,

    /// View count.
    #[serde(default)]
    pub views: u64,

    /// Visibility flag as sent by the API: 1 public, 0 private.
    #[serde(default)]
    pub public: u8,

    /// Number of wallpapers in the collection.
    #[serde(default)]
    pub count: u64,
}

impl Collection {
    /// Whether the collection is publicly visible.
    pub fn is_public(&self) -> bool {
        self.public != 0
    }
}
