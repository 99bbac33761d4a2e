//! Result and request types for the three registry lookup operations.
//!
//! These are the stable output shapes returned to callers (and cached
//! in between), decoupled from the raw registry wire formats.

pub mod downloads;
pub mod package;
pub mod search;

pub use downloads::{DownloadPeriod, DownloadStats};
pub use package::PackageInfo;
pub use search::{DownloadCounts, PackageDate, SearchEntry, SearchOptions, SortBy};
