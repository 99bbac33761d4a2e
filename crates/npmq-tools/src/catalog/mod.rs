//! Tool catalog and argument dispatch
//!
//! Three tools, one per lookup operation. Argument objects arrive as raw
//! JSON from the invocation layer and are deserialized here; a malformed
//! argument object is rejected before any network call happens.

use serde::Deserialize;
use serde_json::{json, Value};

use npmq_core::{DownloadPeriod, NpmqError, NpmqResult, SearchOptions};
use npmq_registry::Registry;


/// Tool name for the single-package info lookup
pub const SEARCH_NPM_PACKAGE: &str = "searchNpmPackage";
/// Tool name for the full-text search lookup
pub const SEARCH_NPM_PACKAGES: &str = "searchNpmPackages";
/// Tool name for the download-stats lookup
pub const GET_DOWNLOAD_STATS: &str = "getDownloadStats";

/// A callable tool as advertised to clients
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// The full tool catalog
pub fn list_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: SEARCH_NPM_PACKAGE,
            description: "Look up an npm package by exact name: latest version, \
                          description, author, homepage, repository and dependencies.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "packageName": { "type": "string" }
                },
                "required": ["packageName"]
            }),
        },
        ToolSpec {
            name: SEARCH_NPM_PACKAGES,
            description: "Full-text search over the npm registry, returning name, \
                          description and version per match. Supports paging, ranking \
                          weights and sort order.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": { "type": "string" },
                    "size": { "type": "integer" },
                    "from": { "type": "integer" },
                    "quality": { "type": "number" },
                    "popularity": { "type": "number" },
                    "maintenance": { "type": "number" },
                    "sortBy": {
                        "type": "string",
                        "enum": ["optimal", "quality", "popularity", "maintenance",
                                 "created", "updated", "downloads"]
                    }
                },
                "required": ["query"]
            }),
        },
        ToolSpec {
            name: GET_DOWNLOAD_STATS,
            description: "Download count for an npm package over a fixed period \
                          (last-day, last-week or last-month).",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "packageName": { "type": "string" },
                    "period": {
                        "type": "string",
                        "enum": ["last-day", "last-week", "last-month"]
                    }
                },
                "required": ["packageName"]
            }),
        },
    ]
}

#[derive(Debug, Deserialize)]
struct PackageArgs {
    #[serde(rename = "packageName")]
    package_name: String,
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    query: String,
    #[serde(flatten)]
    options: SearchOptions,
}

#[derive(Debug, Deserialize)]
struct StatsArgs {
    #[serde(rename = "packageName")]
    package_name: String,
    #[serde(default)]
    period: DownloadPeriod,
}

/// Invoke a tool by name with a JSON argument object, returning the
/// JSON-serializable lookup result
pub async fn call_tool(registry: &Registry, name: &str, arguments: Value) -> NpmqResult<Value> {
    match name {
        SEARCH_NPM_PACKAGE => {
            let args: PackageArgs = parse_args(name, arguments)?;
            let info = registry.package_info(&args.package_name).await?;
            to_value(info)
        }
        SEARCH_NPM_PACKAGES => {
            let args: SearchArgs = parse_args(name, arguments)?;
            let results = registry.search(&args.query, &args.options).await?;
            to_value(results)
        }
        GET_DOWNLOAD_STATS => {
            let args: StatsArgs = parse_args(name, arguments)?;
            let stats = registry
                .download_stats(&args.package_name, args.period)
                .await?;
            to_value(stats)
        }
        other => Err(NpmqError::UnknownTool {
            name: other.to_string(),
        }),
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(tool: &str, arguments: Value) -> NpmqResult<T> {
    serde_json::from_value(arguments).map_err(|e| NpmqError::InvalidArguments {
        tool: tool.to_string(),
        reason: e.to_string(),
    })
}

fn to_value<T: serde::Serialize>(result: T) -> NpmqResult<Value> {
    serde_json::to_value(result).map_err(|e| NpmqError::Unknown {
        message: e.to_string(),
    })
}
