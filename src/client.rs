//! Wallhaven API client.
//!
//! One method per remote endpoint, plus download helpers. The client
//! injects the API key as the `apikey` query parameter when configured,
//! optionally pauses before each request, and retries HTTP 429 with a
//! fixed delay up to the configured attempt budget.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use futures_util::StreamExt;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{Result, WallhavenError};
use crate::models::{Collection, Data, SearchResults, Tag, UserSettings, Wallpaper};
use crate::query::SearchQuery;

/// Base URL for the Wallhaven API v1.
const DEFAULT_BASE_URL: &str = "https://wallhaven.cc/api/v1";

/// Total request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

const USER_AGENT: &str = concat!("wallhaven-api/", env!("CARGO_PKG_VERSION"));

/// Retry behaviour for rate-limited requests.
#[derive(Debug, Clone, Copy)]
struct RetryPolicy {
    /// Total tries per request, including the first.
    max_attempts: u32,
    /// Sleep between tries.
    delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            delay: Duration::ZERO,
        }
    }
}

/// Async client for the Wallhaven API v1.
///
/// Most endpoints work without authentication; `settings` and the
/// authenticated `collections` listing require an API key, and NSFW
/// search results are only returned when one is set.
///
/// # Example
///
/// ```rust,no_run
/// use wallhaven_api::{SearchQuery, WallhavenClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = WallhavenClient::new()?;
///     let results = client.search(&SearchQuery::new().query("mountains")).await?;
///     for wallpaper in &results.data {
///         println!("{} {}", wallpaper.id, wallpaper.resolution);
///     }
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WallhavenClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    retry: RetryPolicy,
    request_delay: Option<Duration>,
}

/// Builder for [`WallhavenClient`].
#[derive(Debug, Clone)]
pub struct WallhavenClientBuilder {
    api_key: Option<String>,
    base_url: String,
    timeout: Duration,
    connect_timeout: Duration,
    retry: RetryPolicy,
    request_delay: Option<Duration>,
}

impl Default for WallhavenClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            retry: RetryPolicy::default(),
            request_delay: None,
        }
    }
}

impl WallhavenClientBuilder {
    /// Set the API key, sent as the `apikey` query parameter.
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API base URL.
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the total request timeout (default 5s).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout (default 2s).
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Retry rate-limited (HTTP 429) and failed requests up to
    /// `max_attempts` total tries, sleeping `delay` between tries.
    ///
    /// The default is a single attempt with no sleep.
    pub fn retry(mut self, max_attempts: u32, delay: Duration) -> Self {
        self.retry = RetryPolicy {
            max_attempts: max_attempts.max(1),
            delay,
        };
        self
    }

    /// Pause before every request, as a client-side courtesy against the
    /// API's 45-requests-per-minute limit.
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = Some(delay);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<WallhavenClient> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .build()?;

        Ok(WallhavenClient {
            client,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            api_key: self.api_key,
            retry: self.retry,
            request_delay: self.request_delay,
        })
    }
}

impl WallhavenClient {
    /// Create a client with default settings and no API key.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Create a builder for a customized client.
    pub fn builder() -> WallhavenClientBuilder {
        WallhavenClientBuilder::default()
    }

    /// The API key in use, if any.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn endpoint(&self, segments: &[&str]) -> String {
        format!("{}/{}", self.base_url, segments.join("/"))
    }

    /// Perform a GET with retry and status translation.
    ///
    /// The API key is only attached for API endpoints, never for raw
    /// image URLs.
    async fn get(
        &self,
        url: &str,
        params: &[(&'static str, String)],
        with_key: bool,
    ) -> Result<reqwest::Response> {
        let mut attempt = 0;
        loop {
            attempt += 1;

            if let Some(delay) = self.request_delay {
                tokio::time::sleep(delay).await;
            }

            let mut request = self.client.get(url);
            if !params.is_empty() {
                request = request.query(params);
            }
            if with_key {
                if let Some(key) = &self.api_key {
                    request = request.query(&[("apikey", key.as_str())]);
                }
            }

            debug!("GET {} (attempt {})", url, attempt);
            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    if attempt >= self.retry.max_attempts {
                        return Err(e.into());
                    }
                    warn!("Request to {} failed, retrying: {}", url, e);
                    tokio::time::sleep(self.retry.delay).await;
                    continue;
                }
            };

            match response.status() {
                status if status.is_success() => return Ok(response),
                StatusCode::TOO_MANY_REQUESTS => {
                    if attempt >= self.retry.max_attempts {
                        return Err(WallhavenError::RateLimited);
                    }
                    warn!("Rate limited on {}, retrying after delay", url);
                    tokio::time::sleep(self.retry.delay).await;
                }
                StatusCode::UNAUTHORIZED => return Err(WallhavenError::InvalidApiKey),
                status => {
                    return Err(WallhavenError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: response.url().to_string(),
                    })
                }
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&'static str, String)],
    ) -> Result<T> {
        let response = self.get(url, params, true).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Search for wallpapers.
    ///
    /// Without filters this lists the latest uploads, like the site's
    /// front page.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResults> {
        self.get_json(&self.endpoint(&["search"]), &query.to_params())
            .await
    }

    /// Get wallpaper metadata by ID.
    ///
    /// # Errors
    ///
    /// Returns [`WallhavenError::WallpaperNotFound`] if no wallpaper has
    /// this ID.
    pub async fn wallpaper(&self, wallpaper_id: &str) -> Result<Wallpaper> {
        let url = self.endpoint(&["w", wallpaper_id]);
        match self.get_json::<Data<Wallpaper>>(&url, &[]).await {
            Ok(envelope) => Ok(envelope.data),
            Err(WallhavenError::UnexpectedStatus { status: 404, .. }) => {
                Err(WallhavenError::WallpaperNotFound(wallpaper_id.to_string()))
            }
            Err(e) => Err(e),
        }
    }

    /// Check whether a wallpaper with this ID exists.
    pub async fn wallpaper_exists(&self, wallpaper_id: &str) -> Result<bool> {
        match self.wallpaper(wallpaper_id).await {
            Ok(_) => Ok(true),
            Err(WallhavenError::WallpaperNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Download the full-size image of a wallpaper into memory.
    pub async fn download_wallpaper(&self, wallpaper_id: &str) -> Result<Bytes> {
        let wallpaper = self.wallpaper(wallpaper_id).await?;
        let response = self.get(&wallpaper.path, &[], false).await?;
        Ok(response.bytes().await?)
    }

    /// Download the full-size image of a wallpaper to a file.
    ///
    /// Missing parent directories are created. Returns the path written.
    pub async fn download_wallpaper_to<P: AsRef<Path>>(
        &self,
        wallpaper_id: &str,
        file_path: P,
    ) -> Result<PathBuf> {
        let wallpaper = self.wallpaper(wallpaper_id).await?;
        let response = self.get(&wallpaper.path, &[], false).await?;

        let file_path = file_path.as_ref().to_path_buf();
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let mut file = tokio::fs::File::create(&file_path).await?;
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            file.write_all(&chunk?).await?;
        }
        file.flush().await?;

        debug!("Saved wallpaper {} to {}", wallpaper_id, file_path.display());
        Ok(file_path)
    }

    /// Get tag metadata by numeric tag ID.
    pub async fn tag(&self, tag_id: u64) -> Result<Tag> {
        let url = self.endpoint(&["tag", &tag_id.to_string()]);
        let envelope: Data<Tag> = self.get_json(&url, &[]).await?;
        Ok(envelope.data)
    }

    /// Get the browsing settings of the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns [`WallhavenError::MissingApiKey`] if the client has no key.
    pub async fn settings(&self) -> Result<UserSettings> {
        if self.api_key.is_none() {
            return Err(WallhavenError::MissingApiKey("settings"));
        }
        let envelope: Data<UserSettings> = self.get_json(&self.endpoint(&["settings"]), &[]).await?;
        Ok(envelope.data)
    }

    /// List the authenticated account's own collections, including
    /// private ones.
    ///
    /// # Errors
    ///
    /// Returns [`WallhavenError::MissingApiKey`] if the client has no key.
    pub async fn my_collections(&self) -> Result<Vec<Collection>> {
        if self.api_key.is_none() {
            return Err(WallhavenError::MissingApiKey("collections"));
        }
        let envelope: Data<Vec<Collection>> =
            self.get_json(&self.endpoint(&["collections"]), &[]).await?;
        Ok(envelope.data)
    }

    /// List another user's public collections.
    pub async fn user_collections(&self, username: &str) -> Result<Vec<Collection>> {
        let url = self.endpoint(&["collections", username]);
        let envelope: Data<Vec<Collection>> = self.get_json(&url, &[]).await?;
        Ok(envelope.data)
    }

    /// List the wallpapers in a user's collection, one page at a time.
    pub async fn collection_wallpapers(
        &self,
        username: &str,
        collection_id: u64,
        page: Option<u32>,
    ) -> Result<SearchResults> {
        let url = self.endpoint(&["collections", username, &collection_id.to_string()]);
        let params: Vec<(&'static str, String)> = match page {
            Some(page) => vec![("page", page.to_string())],
            None => Vec::new(),
        };
        self.get_json(&url, &params).await
    }
}
