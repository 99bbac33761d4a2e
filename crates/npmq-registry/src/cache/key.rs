//! Cache key construction.
//!
//! Keys are namespaced by operation so two operations can never collide on
//! the same argument, and arguments are normalized (trimmed, fixed field
//! order, unset options omitted) so equivalent requests always map to the
//! same key. Search arguments are percent-encoded so free text in the query
//! cannot forge an option fragment and collide with a different request.

use url::form_urlencoded;

use npmq_core::{DownloadPeriod, SearchOptions};

/// Key for a single-package info lookup
pub fn package_info(name: &str) -> String {
    format!("package-info:{}", name.trim())
}

/// Key for a full-text search lookup
pub fn search(query: &str, options: &SearchOptions) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("text", query.trim());
    if let Some(size) = options.size {
        params.append_pair("size", &size.to_string());
    }
    if let Some(from) = options.from {
        params.append_pair("from", &from.to_string());
    }
    for (label, weight) in [
        ("quality", options.quality),
        ("popularity", options.popularity),
        ("maintenance", options.maintenance),
    ] {
        if let Some(weight) = weight {
            params.append_pair(label, &weight.to_string());
        }
    }
    if let Some(sort_by) = &options.sort_by {
        params.append_pair("sortBy", sort_by.as_str());
    }
    format!("search:{}", params.finish())
}

/// Key for a download-stats lookup
pub fn download_stats(name: &str, period: DownloadPeriod) -> String {
    format!("downloads:{}:{}", period.as_str(), name.trim())
}
