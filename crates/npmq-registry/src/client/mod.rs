//! HTTP client for the npm registry endpoints
//!
//! One outbound GET per lookup, no retries and no timeout override beyond
//! the transport defaults. A failed call is classified by response status
//! into a [`FetchFailure`]; the lookup layer attaches operation context on
//! top of that classification.

use std::time::Duration;

use reqwest::{Client, ClientBuilder, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::form_urlencoded;

use npmq_core::{DownloadPeriod, NpmqError, NpmqResult, SearchOptions};


/// Package document and search endpoints
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";
/// Download statistics endpoint
pub const DEFAULT_DOWNLOADS_URL: &str = "https://api.npmjs.org";

/// Classified failure of a single registry request.
///
/// | status | failure |
/// |---|---|
/// | 404 | `NotFound` |
/// | 429 | `RateLimited` |
/// | 500 | `Upstream` |
/// | other non-2xx | `Status(code)` |
/// | no response | `Network` |
/// | unparseable body | `Decode` |
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("resource not found (HTTP 404)")]
    NotFound,
    #[error("rate limited (HTTP 429)")]
    RateLimited,
    #[error("upstream registry error (HTTP 500)")]
    Upstream,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("{0}")]
    Network(reqwest::Error),
    #[error("failed to decode response body: {0}")]
    Decode(reqwest::Error),
}

impl FetchFailure {
    /// Map into the shared error taxonomy. `not_found` supplies the
    /// operation-specific NotFound error so the message carries the package
    /// name or query that failed.
    pub fn into_error(self, not_found: impl FnOnce() -> NpmqError) -> NpmqError {
        match self {
            FetchFailure::NotFound => not_found(),
            FetchFailure::RateLimited => NpmqError::RateLimited,
            FetchFailure::Upstream => NpmqError::UpstreamError,
            FetchFailure::Status(status) => NpmqError::RequestFailed { status },
            FetchFailure::Network(source) => NpmqError::network(source),
            FetchFailure::Decode(source) => NpmqError::Unknown {
                message: source.to_string(),
            },
        }
    }
}

/// HTTP client for npm registry operations
#[derive(Debug, Clone)]
pub struct RegistryClient {
    /// Underlying HTTP client with connection pooling
    client: Client,
    /// Base URL for package documents and search
    registry_url: String,
    /// Base URL for download statistics
    downloads_url: String,
}

impl RegistryClient {
    /// Create a client against the public npm registry
    pub fn new() -> NpmqResult<Self> {
        Self::with_urls(DEFAULT_REGISTRY_URL, DEFAULT_DOWNLOADS_URL)
    }

    /// Create a client against custom base URLs (used by tests)
    pub fn with_urls(
        registry_url: impl Into<String>,
        downloads_url: impl Into<String>,
    ) -> NpmqResult<Self> {
        let client = ClientBuilder::new()
            // Connection pooling configuration
            .pool_max_idle_per_host(50)
            .pool_idle_timeout(Duration::from_secs(90))
            // Enable gzip compression
            .gzip(true)
            // User agent
            .user_agent(concat!("npmq/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NpmqError::Unknown {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            registry_url: registry_url.into().trim_end_matches('/').to_string(),
            downloads_url: downloads_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// URL of the single-package document for `name`
    pub fn package_url(&self, name: &str) -> String {
        format!("{}/{}", self.registry_url, encode_package_name(name))
    }

    /// URL of the full-text search endpoint for `query` with `options`.
    ///
    /// Unset options are omitted; `sortBy` is forwarded verbatim, including
    /// values the registry may not recognize.
    pub fn search_url(&self, query: &str, options: &SearchOptions) -> String {
        let mut params = form_urlencoded::Serializer::new(String::new());
        params.append_pair("text", query);
        if let Some(size) = options.size {
            params.append_pair("size", &size.to_string());
        }
        if let Some(from) = options.from {
            params.append_pair("from", &from.to_string());
        }
        if let Some(quality) = options.quality {
            params.append_pair("quality", &quality.to_string());
        }
        if let Some(popularity) = options.popularity {
            params.append_pair("popularity", &popularity.to_string());
        }
        if let Some(maintenance) = options.maintenance {
            params.append_pair("maintenance", &maintenance.to_string());
        }
        if let Some(sort_by) = &options.sort_by {
            params.append_pair("sortBy", sort_by.as_str());
        }
        format!("{}/-/v1/search?{}", self.registry_url, params.finish())
    }

    /// URL of the point download-count endpoint for `name` over `period`
    pub fn download_stats_url(&self, name: &str, period: DownloadPeriod) -> String {
        format!(
            "{}/downloads/point/{}/{}",
            self.downloads_url,
            period.as_str(),
            encode_package_name(name)
        )
    }

    /// Perform one GET and parse the JSON body, classifying any failure
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchFailure> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchFailure::Network)?;

        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(FetchFailure::Decode)
        } else {
            Err(classify_status(status))
        }
    }
}

/// Classify a non-2xx response status
fn classify_status(status: StatusCode) -> FetchFailure {
    match status.as_u16() {
        404 => FetchFailure::NotFound,
        429 => FetchFailure::RateLimited,
        500 => FetchFailure::Upstream,
        code => FetchFailure::Status(code),
    }
}

/// Encode package name for URL (handle scoped packages)
pub fn encode_package_name(name: &str) -> String {
    if name.starts_with('@') {
        // Scoped package: @org/pkg -> @org%2fpkg
        name.replace('/', "%2f")
    } else {
        name.to_string()
    }
}
