//! Tool-invocation layer for npmq
//!
//! Exposes the three registry lookups as named tools with JSON schemas, plus
//! a stdio JSON-RPC server that serves `tools/list`, `tools/call` and the
//! `npm://popular` resource to tool-protocol clients.

pub mod catalog;
pub mod server;

pub use catalog::{call_tool, list_tools, ToolSpec};
pub use server::ToolServer;
