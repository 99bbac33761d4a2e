//! npm registry API response types
//!
//! Wire models for the two registry endpoints that need a reshape. The
//! downloads endpoint already matches `npmq_core::DownloadStats`, so it has no
//! model here. Every optional field defaults to absent rather than failing the
//! whole document.

use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use npmq_core::{DownloadCounts, PackageDate};

/// Full package document from `GET {registry}/{name}`
#[derive(Debug, Clone, Deserialize)]
pub struct Packument {
    /// Package name
    pub name: String,
    /// Package description
    pub description: Option<String>,
    /// Dist tags, `latest` being the one we care about
    #[serde(rename = "dist-tags", default)]
    pub dist_tags: HashMap<String, String>,
    /// Per-version metadata keyed by version string
    #[serde(default)]
    pub versions: HashMap<String, VersionMetadata>,
    /// Author, either a bare string or an object with a name field
    pub author: Option<PersonField>,
    /// Homepage URL
    pub homepage: Option<String>,
    /// Repository, either a bare URL string or an object with a url field
    pub repository: Option<RepositoryField>,
}

/// The slice of per-version metadata the package-info reshape needs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VersionMetadata {
    /// Runtime dependencies: name to version range
    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,
}

/// Duck-typed person field: some packuments carry a bare string, others an
/// object with `name` (and usually `email`/`url`, which we drop).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PersonField {
    Name(String),
    Object { name: Option<String> },
}

impl PersonField {
    /// Flatten to a single display string
    pub fn display(&self) -> Option<String> {
        match self {
            PersonField::Name(name) => Some(name.clone()),
            PersonField::Object { name } => name.clone(),
        }
    }
}

/// Duck-typed repository field: bare URL string or an object with `url`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RepositoryField {
    Url(String),
    Object { url: Option<String> },
}

impl RepositoryField {
    /// Flatten to a single URL string
    pub fn url(&self) -> Option<String> {
        match self {
            RepositoryField::Url(url) => Some(url.clone()),
            RepositoryField::Object { url } => url.clone(),
        }
    }
}

/// Response from `GET {registry}/-/v1/search`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Result objects in upstream relevance order
    #[serde(default)]
    pub objects: Vec<SearchObject>,
    /// Total number of matches, when reported
    pub total: Option<u64>,
}

/// One search result object
#[derive(Debug, Clone, Deserialize)]
pub struct SearchObject {
    pub package: SearchPackage,
}

/// Package summary inside a search result object
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPackage {
    pub name: String,
    pub version: String,
    pub description: Option<String>,
    pub date: Option<DateField>,
    pub downloads: Option<DownloadCounts>,
}

/// Publish date as reported by the search endpoint. The public v1 endpoint
/// reports a plain ISO-8601 string; the website variant reports a
/// `{ts, rel}` object. Both are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DateField {
    Structured(PackageDate),
    Iso(String),
}

impl DateField {
    /// Normalize to the output date shape
    pub fn into_date(self) -> PackageDate {
        match self {
            DateField::Structured(date) => date,
            DateField::Iso(iso) => PackageDate {
                ts: None,
                rel: Some(iso),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_field_accepts_string_and_object() {
        let person: PersonField = serde_json::from_str("\"Facebook\"").unwrap();
        assert_eq!(person.display(), Some("Facebook".to_string()));

        let person: PersonField =
            serde_json::from_str(r#"{"name": "Facebook", "email": "oss@fb.com"}"#).unwrap();
        assert_eq!(person.display(), Some("Facebook".to_string()));

        let person: PersonField = serde_json::from_str("{}").unwrap();
        assert_eq!(person.display(), None);
    }

    #[test]
    fn test_repository_field_accepts_string_and_object() {
        let repo: RepositoryField =
            serde_json::from_str("\"https://github.com/facebook/react\"").unwrap();
        assert_eq!(
            repo.url(),
            Some("https://github.com/facebook/react".to_string())
        );

        let repo: RepositoryField =
            serde_json::from_str(r#"{"type": "git", "url": "https://github.com/facebook/react"}"#)
                .unwrap();
        assert_eq!(
            repo.url(),
            Some("https://github.com/facebook/react".to_string())
        );
    }

    #[test]
    fn test_date_field_accepts_both_shapes() {
        let date: DateField = serde_json::from_str("\"2023-03-15T00:00:00.000Z\"").unwrap();
        let date = date.into_date();
        assert_eq!(date.rel, Some("2023-03-15T00:00:00.000Z".to_string()));
        assert_eq!(date.ts, None);

        let date: DateField =
            serde_json::from_str(r#"{"ts": 1678886400000, "rel": "2 months ago"}"#).unwrap();
        let date = date.into_date();
        assert_eq!(date.ts, Some(1_678_886_400_000));
        assert_eq!(date.rel, Some("2 months ago".to_string()));
    }

    #[test]
    fn test_packument_tolerates_missing_fields() {
        let doc: Packument = serde_json::from_str(r#"{"name": "bare-package"}"#).unwrap();
        assert_eq!(doc.name, "bare-package");
        assert!(doc.dist_tags.is_empty());
        assert!(doc.versions.is_empty());
        assert!(doc.author.is_none());
    }
}
