//! Reshaped single-package lookup result.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Package information reshaped from the registry packument.
///
/// `version` and `dependencies` always refer to the version tagged `latest`,
/// never to any other published version. The duck-typed upstream `author` and
/// `repository` fields are flattened to plain display strings. Immutable once
/// constructed; a refreshed lookup replaces the whole value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageInfo {
    /// Package name
    pub name: String,
    /// Version currently tagged `latest`
    pub version: String,
    /// Package description
    pub description: Option<String>,
    /// Author flattened to a display string
    pub author: Option<String>,
    /// Homepage URL
    pub homepage: Option<String>,
    /// Repository flattened to a URL string
    pub repository: Option<String>,
    /// Dependency name to version range, for the latest version only
    pub dependencies: BTreeMap<String, String>,
}
