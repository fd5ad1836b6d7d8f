//! Data models for Wallhaven API responses.
//!
//! These structs mirror the JSON schema returned by the remote API and
//! are not interpreted beyond deserialization plus a few convenience
//! accessors.

pub mod collection;
pub mod search;
pub mod settings;
pub mod wallpaper;

// Re-exports for convenience
pub use collection::Collection;
pub use search::{Meta, SearchResults};
pub use settings::UserSettings;
pub use wallpaper::{Tag, Thumbs, Uploader, Wallpaper};

use serde::Deserialize;

/// Envelope for single-object endpoints, which wrap their payload in
/// `{"data": ...}`.
#[derive(Debug, Deserialize)]
pub(crate) struct Data<T> {
    pub data: T,
}
