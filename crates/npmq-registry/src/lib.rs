//! npm registry lookup operations for npmq
//!
//! This crate wraps the public npm registry HTTP API in three lookup
//! operations (package info, full-text search, download statistics), each
//! backed by a short-term in-memory result cache with TTL expiry.

pub mod api;
pub mod cache;
pub mod client;
pub mod lookup;

// Re-export main types
pub use cache::{CacheEntry, CacheStats, RegistryCache, TtlCache};
pub use client::{FetchFailure, RegistryClient};
pub use lookup::Registry;
