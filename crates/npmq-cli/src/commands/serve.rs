//! `npmq serve` command implementation.
//!
//! Runs the stdio tool server over the shared registry. Logging already goes
//! to stderr, so stdout stays a clean protocol channel.

use npmq_core::NpmqResult;
use npmq_tools::ToolServer;

use super::CommandContext;

/// Execute the `npmq serve` command
pub async fn execute(ctx: &CommandContext) -> NpmqResult<()> {
    ToolServer::new(ctx.registry.clone()).run().await
}
