//! Stdio JSON-RPC tool server
//!
//! Speaks newline-delimited JSON-RPC 2.0 on stdin/stdout, the framing used
//! by tool-protocol clients. Handles `initialize`, `tools/list`,
//! `tools/call`, `resources/list` and `resources/read`; lookup failures
//! become error-text tool results while protocol misuse (unknown method,
//! bad params) becomes a JSON-RPC error. Requests without an id are
//! notifications and get no response.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use npmq_core::{NpmqError, NpmqResult, SearchOptions};
use npmq_registry::Registry;

use crate::catalog;


/// Protocol revision advertised during `initialize`
const PROTOCOL_VERSION: &str = "2024-11-05";
/// URI of the popular-packages resource
const POPULAR_URI: &str = "npm://popular";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

/// Stdio tool server over one shared [`Registry`]
pub struct ToolServer {
    registry: Arc<Registry>,
}

impl ToolServer {
    /// Create a server over the given registry
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Serve requests from stdin until it closes
    pub async fn run(&self) -> NpmqResult<()> {
        info!("Tool server listening on stdio");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| NpmqError::io("Failed to read from stdin".to_string(), e))?
        {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut payload = response.to_string();
                payload.push('\n');
                stdout
                    .write_all(payload.as_bytes())
                    .await
                    .map_err(|e| NpmqError::io("Failed to write to stdout".to_string(), e))?;
                stdout
                    .flush()
                    .await
                    .map_err(|e| NpmqError::io("Failed to flush stdout".to_string(), e))?;
            }
        }

        info!("Stdin closed, shutting down");
        Ok(())
    }

    /// Handle one request line; `None` for notifications
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let request: Request = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(e) => {
                warn!("Unparseable request: {}", e);
                return Some(error_response(
                    Value::Null,
                    PARSE_ERROR,
                    &format!("Parse error: {e}"),
                ));
            }
        };

        debug!("Handling '{}'", request.method);
        let id = request.id.clone();
        let outcome = self.dispatch(&request).await;

        // Notifications (no id) never get a response
        let id = id?;
        Some(match outcome {
            Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
            Err((code, message)) => error_response(id, code, &message),
        })
    }

    async fn dispatch(&self, request: &Request) -> Result<Value, (i64, String)> {
        match request.method.as_str() {
            "initialize" => Ok(json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {}, "resources": {} },
                "serverInfo": {
                    "name": "npmq",
                    "version": env!("CARGO_PKG_VERSION"),
                },
            })),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(tools_list()),
            "tools/call" => self.tools_call(&request.params).await,
            "resources/list" => Ok(json!({
                "resources": [{
                    "uri": POPULAR_URI,
                    "name": "popular-packages",
                    "description": "The ten most popular packages on the npm registry",
                    "mimeType": "application/json",
                }]
            })),
            "resources/read" => self.resources_read(&request.params).await,
            other => Err((METHOD_NOT_FOUND, format!("Method '{other}' not found"))),
        }
    }

    async fn tools_call(&self, params: &Value) -> Result<Value, (i64, String)> {
        let name = params["name"]
            .as_str()
            .ok_or_else(|| (INVALID_PARAMS, "Missing tool name".to_string()))?;
        let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

        match catalog::call_tool(&self.registry, name, arguments).await {
            Ok(result) => Ok(json!({
                "content": [{ "type": "text", "text": result.to_string() }],
            })),
            Err(err @ NpmqError::UnknownTool { .. })
            | Err(err @ NpmqError::InvalidArguments { .. }) => {
                Err((INVALID_PARAMS, err.to_string()))
            }
            // Lookup failures are tool results, not protocol errors
            Err(err) => Ok(json!({
                "content": [{ "type": "text", "text": err.to_string() }],
                "isError": true,
            })),
        }
    }

    async fn resources_read(&self, params: &Value) -> Result<Value, (i64, String)> {
        let uri = params["uri"]
            .as_str()
            .ok_or_else(|| (INVALID_PARAMS, "Missing resource uri".to_string()))?;
        if uri != POPULAR_URI {
            return Err((INVALID_PARAMS, format!("Unknown resource '{uri}'")));
        }

        let options = SearchOptions {
            size: Some(10),
            ..Default::default()
        };
        let text = match self.registry.search("popularity", &options).await {
            Ok(results) => {
                let trimmed: Vec<Value> = results
                    .iter()
                    .map(|entry| {
                        json!({
                            "name": entry.name,
                            "description": entry.description,
                            "version": entry.version,
                        })
                    })
                    .collect();
                serde_json::to_string_pretty(&trimmed).unwrap_or_else(|_| "[]".to_string())
            }
            Err(err) => format!("Failed to fetch popular packages: {err}"),
        };

        Ok(json!({
            "contents": [{
                "uri": uri,
                "mimeType": "application/json",
                "text": text,
            }]
        }))
    }
}

fn tools_list() -> Value {
    let tools: Vec<Value> = catalog::list_tools()
        .into_iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema,
            })
        })
        .collect();
    json!({ "tools": tools })
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message },
    })
}
