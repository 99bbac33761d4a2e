//! Short-term result caching with TTL support
//!
//! Entries expire after a fixed TTL and are evicted lazily on read. There is
//! no capacity bound and no LRU: the working set is one entry per distinct
//! lookup, which stays small in practice, but unbounded growth is a known
//! limitation of this design.

use std::time::{Duration, SystemTime};

use dashmap::DashMap;

use npmq_core::{DownloadStats, PackageInfo, SearchEntry};

pub mod key;

#[cfg(test)]
mod tests;

/// Default TTL shared by all three lookup operations
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Cache entry with TTL
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// Cached lookup result
    pub value: T,
    /// When the entry was stored
    pub stored_at: SystemTime,
    /// Time-to-live duration
    pub ttl: Duration,
}

impl<T> CacheEntry<T> {
    /// Create new cache entry with the default TTL
    pub fn new(value: T) -> Self {
        Self::with_ttl(value, DEFAULT_TTL)
    }

    /// Create cache entry with custom TTL
    pub fn with_ttl(value: T, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: SystemTime::now(),
            ttl,
        }
    }

    /// Check if the cache entry is still fresh
    pub fn is_fresh(&self) -> bool {
        match self.stored_at.elapsed() {
            Ok(elapsed) => elapsed < self.ttl,
            Err(_) => false, // Clock went backwards, consider stale
        }
    }

    /// Get age of the cache entry
    pub fn age(&self) -> Option<Duration> {
        self.stored_at.elapsed().ok()
    }
}

/// In-memory key/value cache with TTL expiry enforced on read
#[derive(Debug)]
pub struct TtlCache<T> {
    /// Cache storage
    entries: DashMap<String, CacheEntry<T>>,
}

impl<T: Clone> TtlCache<T> {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Get the cached value if present and fresh.
    ///
    /// A stale entry is removed as a side effect and treated as absent, so a
    /// read can never observe a value past its expiry. Absence is not an
    /// error.
    pub fn get(&self, key: &str) -> Option<T> {
        let entry = self.entries.get(key)?;
        if entry.is_fresh() {
            Some(entry.value.clone())
        } else {
            // Release the read guard before removing
            drop(entry);
            self.entries.remove(key);
            None
        }
    }

    /// Store a value with the default TTL, overwriting any existing entry
    pub fn insert(&self, key: String, value: T) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    /// Store a value with a custom TTL
    pub fn insert_with_ttl(&self, key: String, value: T, ttl: Duration) {
        self.entries.insert(key, CacheEntry::with_ttl(value, ttl));
    }

    /// Check if a key is cached and fresh
    pub fn contains_fresh(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .map(|entry| entry.is_fresh())
            .unwrap_or(false)
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        let mut fresh_count = 0;
        let mut stale_count = 0;

        for entry in self.entries.iter() {
            if entry.is_fresh() {
                fresh_count += 1;
            } else {
                stale_count += 1;
            }
        }

        CacheStats {
            total_entries: self.entries.len(),
            fresh_entries: fresh_count,
            stale_entries: stale_count,
        }
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Remove stale entries, returning how many were dropped
    pub fn cleanup(&self) -> usize {
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            if entry.is_fresh() {
                true
            } else {
                removed += 1;
                false
            }
        });
        removed
    }
}

impl<T: Clone> Default for TtlCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics
#[derive(Debug, Clone)]
pub struct CacheStats {
    /// Total number of entries
    pub total_entries: usize,
    /// Number of fresh entries
    pub fresh_entries: usize,
    /// Number of stale entries
    pub stale_entries: usize,
}

/// One cache per lookup operation, all sharing the default TTL.
///
/// Constructed once at process start and injected into [`crate::Registry`];
/// entries are self-expiring so there is no teardown.
#[derive(Debug)]
pub struct RegistryCache {
    /// Package-info results
    pub packages: TtlCache<PackageInfo>,
    /// Search results
    pub searches: TtlCache<Vec<SearchEntry>>,
    /// Download statistics
    pub downloads: TtlCache<DownloadStats>,
}

impl RegistryCache {
    /// Create an empty cache for all three operations
    pub fn new() -> Self {
        Self {
            packages: TtlCache::new(),
            searches: TtlCache::new(),
            downloads: TtlCache::new(),
        }
    }
}

impl Default for RegistryCache {
    fn default() -> Self {
        Self::new()
    }
}
