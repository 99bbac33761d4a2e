//! The three registry lookup operations
//!
//! Each operation runs the same short pipeline: build a cache key, consult
//! the cache, on miss fetch from the registry, reshape the document into its
//! stable output type, cache the result for five minutes and return it.
//! Failures propagate immediately with operation context attached; nothing
//! is cached on failure. Concurrent misses for the same key may both fetch
//! and both write; last writer wins with equivalent data.

use tracing::{debug, error};

use npmq_core::{
    DownloadPeriod, DownloadStats, NpmqError, NpmqResult, PackageInfo, SearchEntry, SearchOptions,
};

use crate::api::{Packument, SearchResponse};
use crate::cache::{key, RegistryCache};
use crate::client::{FetchFailure, RegistryClient};


/// Registry lookup operations over one shared client and result cache
#[derive(Debug)]
pub struct Registry {
    client: RegistryClient,
    cache: RegistryCache,
}

impl Registry {
    /// Create a registry against the public npm endpoints
    pub fn new() -> NpmqResult<Self> {
        Ok(Self::with_parts(RegistryClient::new()?, RegistryCache::new()))
    }

    /// Create a registry from an explicit client and cache
    pub fn with_parts(client: RegistryClient, cache: RegistryCache) -> Self {
        Self { client, cache }
    }

    /// Access the result cache
    pub fn cache(&self) -> &RegistryCache {
        &self.cache
    }

    /// Look up one package: latest version, flattened author/repository and
    /// the dependency map of the latest version only.
    pub async fn package_info(&self, name: &str) -> NpmqResult<PackageInfo> {
        let cache_key = key::package_info(name);
        if let Some(cached) = self.cache.packages.get(&cache_key) {
            debug!("Cache hit for package '{}'", name);
            return Ok(cached);
        }

        let url = self.client.package_url(name);
        let document: Packument = self.client.get_json(&url).await.map_err(|failure| {
            error!("Package lookup for '{}' failed: {}", name, failure);
            failure.into_error(|| NpmqError::PackageNotFound {
                name: name.to_string(),
            })
        })?;

        let info = reshape_package(document);
        self.cache.packages.insert(cache_key, info.clone());
        Ok(info)
    }

    /// Full-text search, preserving upstream relevance order.
    ///
    /// All options are forwarded as given; an unrecognized `sortBy` value is
    /// deliberately not rejected here, the registry decides what it means.
    pub async fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> NpmqResult<Vec<SearchEntry>> {
        let cache_key = key::search(query, options);
        if let Some(cached) = self.cache.searches.get(&cache_key) {
            debug!("Cache hit for search '{}'", query);
            return Ok(cached);
        }

        let url = self.client.search_url(query, options);
        let response: SearchResponse = self.client.get_json(&url).await.map_err(|failure| {
            error!("Search for '{}' failed: {}", query, failure);
            match failure {
                // Bad parameters come back as 4xx; all of them surface as a
                // failed search rather than a bare status error
                FetchFailure::NotFound => NpmqError::SearchFailed {
                    query: query.to_string(),
                },
                FetchFailure::Status(status) if (400..500).contains(&status) => {
                    NpmqError::SearchFailed {
                        query: query.to_string(),
                    }
                }
                other => other.into_error(|| NpmqError::SearchFailed {
                    query: query.to_string(),
                }),
            }
        })?;

        debug!(
            "Search for '{}' returned {} results",
            query,
            response.objects.len()
        );
        let entries: Vec<SearchEntry> = response
            .objects
            .into_iter()
            .map(|object| SearchEntry {
                name: object.package.name,
                version: object.package.version,
                description: object.package.description,
                date: object.package.date.map(|date| date.into_date()),
                downloads: object.package.downloads,
            })
            .collect();

        self.cache.searches.insert(cache_key, entries.clone());
        Ok(entries)
    }

    /// Download count for one package over one fixed period. The endpoint
    /// response already matches the output shape, so no reshape happens.
    pub async fn download_stats(
        &self,
        name: &str,
        period: DownloadPeriod,
    ) -> NpmqResult<DownloadStats> {
        let cache_key = key::download_stats(name, period);
        if let Some(cached) = self.cache.downloads.get(&cache_key) {
            debug!("Cache hit for download stats '{}' ({})", name, period);
            return Ok(cached);
        }

        let url = self.client.download_stats_url(name, period);
        let stats: DownloadStats = self.client.get_json(&url).await.map_err(|failure| {
            error!("Download stats for '{}' failed: {}", name, failure);
            failure.into_error(|| NpmqError::DownloadStatsNotFound {
                name: name.to_string(),
            })
        })?;

        self.cache.downloads.insert(cache_key, stats.clone());
        Ok(stats)
    }
}

/// Reshape a packument into the stable package-info output. Fields absent
/// upstream map to `None` or empty, never to a failure.
fn reshape_package(document: Packument) -> PackageInfo {
    let version = document
        .dist_tags
        .get("latest")
        .cloned()
        .unwrap_or_default();
    let dependencies = document
        .versions
        .get(&version)
        .map(|metadata| metadata.dependencies.clone())
        .unwrap_or_default();

    PackageInfo {
        name: document.name,
        version,
        description: document.description,
        author: document.author.as_ref().and_then(|author| author.display()),
        homepage: document.homepage,
        repository: document
            .repository
            .as_ref()
            .and_then(|repository| repository.url()),
        dependencies,
    }
}
