//! # npmq-core
//!
//! Core types shared across all npmq crates.
//!
//! This crate provides:
//! - `PackageInfo`, `SearchEntry` and `DownloadStats` result types
//! - `SearchOptions`, `SortBy` and `DownloadPeriod` request types
//! - `NpmqError` enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Result and request types for the three lookup operations
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{NpmqError, NpmqResult};
pub use types::{
    DownloadCounts, DownloadPeriod, DownloadStats, PackageDate, PackageInfo, SearchEntry,
    SearchOptions, SortBy,
};
