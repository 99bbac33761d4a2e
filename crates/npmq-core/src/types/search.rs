//! Search request options and reshaped search results.

use serde::{Deserialize, Serialize};

/// One element of a search result, in upstream relevance order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchEntry {
    /// Package name
    pub name: String,
    /// Latest published version
    pub version: String,
    /// Package description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Publish date metadata, when upstream provides it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<PackageDate>,
    /// Download counters, when upstream provides them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<DownloadCounts>,
}

/// Publish date as reported by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageDate {
    /// Unix timestamp in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    /// Human-readable relative date ("2 months ago")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
}

/// Download counters as reported by the search endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadCounts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly: Option<u64>,
}

/// Optional parameters for the full-text search endpoint.
///
/// Unset options are omitted from the request URL so the registry applies
/// its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Maximum number of results
    pub size: Option<u32>,
    /// Pagination offset
    pub from: Option<u32>,
    /// Quality ranking weight
    pub quality: Option<f64>,
    /// Popularity ranking weight
    pub popularity: Option<f64>,
    /// Maintenance ranking weight
    pub maintenance: Option<f64>,
    /// Sort order
    pub sort_by: Option<SortBy>,
}

/// Sort order for search results.
///
/// The registry recognizes the seven named orders. Anything else is carried
/// as `Other` and forwarded to the registry uninterpreted; upstream decides
/// what an unrecognized value means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortBy {
    Optimal,
    Quality,
    Popularity,
    Maintenance,
    Created,
    Updated,
    Downloads,
    Other(String),
}

impl SortBy {
    /// The wire value sent to the registry
    pub fn as_str(&self) -> &str {
        match self {
            SortBy::Optimal => "optimal",
            SortBy::Quality => "quality",
            SortBy::Popularity => "popularity",
            SortBy::Maintenance => "maintenance",
            SortBy::Created => "created",
            SortBy::Updated => "updated",
            SortBy::Downloads => "downloads",
            SortBy::Other(value) => value,
        }
    }
}

impl From<String> for SortBy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "optimal" => SortBy::Optimal,
            "quality" => SortBy::Quality,
            "popularity" => SortBy::Popularity,
            "maintenance" => SortBy::Maintenance,
            "created" => SortBy::Created,
            "updated" => SortBy::Updated,
            "downloads" => SortBy::Downloads,
            _ => SortBy::Other(value),
        }
    }
}

impl From<SortBy> for String {
    fn from(value: SortBy) -> Self {
        value.as_str().to_string()
    }
}

impl std::str::FromStr for SortBy {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortBy::from(s.to_string()))
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_round_trip() {
        let sort: SortBy = serde_json::from_str("\"downloads\"").unwrap();
        assert_eq!(sort, SortBy::Downloads);
        assert_eq!(serde_json::to_string(&sort).unwrap(), "\"downloads\"");
    }

    #[test]
    fn test_unrecognized_sort_by_passes_through() {
        let sort: SortBy = serde_json::from_str("\"invalid-sort\"").unwrap();
        assert_eq!(sort, SortBy::Other("invalid-sort".to_string()));
        assert_eq!(sort.as_str(), "invalid-sort");
    }

    #[test]
    fn test_search_options_from_camel_case_json() {
        let options: SearchOptions =
            serde_json::from_str(r#"{"size": 10, "sortBy": "quality"}"#).unwrap();
        assert_eq!(options.size, Some(10));
        assert_eq!(options.sort_by, Some(SortBy::Quality));
        assert_eq!(options.from, None);
    }
}
