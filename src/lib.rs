//! # Wallhaven API
//!
//! A Rust client library for the [Wallhaven.cc](https://wallhaven.cc)
//! API v1: search wallpapers, fetch metadata, and download images.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wallhaven_api::{Purity, SearchQuery, Sorting, WallhavenClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // API key is optional for most endpoints
//!     let client = WallhavenClient::builder()
//!         .api_key("your_api_key")
//!         .build()?;
//!
//!     // Search with typed filters
//!     let results = client
//!         .search(
//!             &SearchQuery::new()
//!                 .query("landscape")
//!                 .purity(Purity::sfw_only())
//!                 .sorting(Sorting::Toplist),
//!         )
//!         .await?;
//!     println!("{} wallpapers match", results.meta.total);
//!
//!     // Fetch one wallpaper's metadata and download it
//!     if let Some(wallpaper) = results.data.first() {
//!         let detail = client.wallpaper(&wallpaper.id).await?;
//!         let path = client
//!             .download_wallpaper_to(&detail.id, detail.filename())
//!             .await?;
//!         println!("Saved to {}", path.display());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Rate Limits
//!
//! The API caps request frequency; configure a courtesy delay and a 429
//! retry budget on the builder:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use wallhaven_api::WallhavenClient;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WallhavenClient::builder()
//!     .request_delay(Duration::from_millis(1400))
//!     .retry(3, Duration::from_secs(5))
//!     .build()?;
//! # Ok(())
//! # }
//! ```

mod client;
pub mod error;
pub mod models;
pub mod query;

// Main interface
pub use client::{WallhavenClient, WallhavenClientBuilder};
pub use error::{Result, WallhavenError};

// Frequently used vocabulary and models
pub use models::{Collection, Meta, SearchResults, Tag, UserSettings, Wallpaper};
pub use query::{
    random_seed, Categories, Color, ImageType, Order, Purity, Ratio, Resolution, SearchQuery,
    Sorting, TopRange,
};
