//! Error types for the Wallhaven API.

use thiserror::Error;

/// Main error type for all Wallhaven operations.
#[derive(Debug, Error)]
pub enum WallhavenError {
    /// The API rejected the key (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    /// An endpoint that requires authentication was called without a key.
    #[error("API key required for {0}")]
    MissingApiKey(&'static str),

    /// Rate limited (HTTP 429) and the retry budget is exhausted.
    #[error("Request limit exceeded, try again later")]
    RateLimited,

    /// No wallpaper exists with the given ID (HTTP 404 on the detail endpoint).
    #[error("No wallpaper with id {0}")]
    WallpaperNotFound(String),

    /// Any other non-success status code.
    #[error("Unexpected status {status} for {url}")]
    UnexpectedStatus {
        /// HTTP status code returned by the server.
        status: u16,
        /// URL of the failing request.
        url: String,
    },

    /// HTTP request failed.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Wallhaven operations.
pub type Result<T> = std::result::Result<T, WallhavenError>;
