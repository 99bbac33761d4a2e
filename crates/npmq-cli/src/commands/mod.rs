//! Command implementations and dispatch logic.
//!
//! Each command is an async function taking a shared CommandContext that
//! holds the one registry instance (and thus the one result cache) for the
//! whole process.

use std::sync::Arc;

use tracing::info;

use npmq_core::NpmqResult;
use npmq_registry::Registry;

pub mod downloads;
pub mod info;
pub mod interactive;
pub mod search;
pub mod serve;


use crate::output::OutputHandler;
use crate::Commands;

/// Shared context for all commands
pub struct CommandContext {
    pub registry: Arc<Registry>,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context against the public npm registry
    pub fn new() -> NpmqResult<Self> {
        Ok(Self {
            registry: Arc::new(Registry::new()?),
            output: OutputHandler::new(),
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> NpmqResult<()> {
    match command {
        Commands::Info { package } => {
            info!("Looking up package: {}", package);
            info::execute(&package, ctx).await
        }
        Commands::Search {
            query,
            size,
            from,
            quality,
            popularity,
            maintenance,
            sort_by,
        } => {
            info!("Searching packages: {}", query);
            let options = npmq_core::SearchOptions {
                size,
                from,
                quality,
                popularity,
                maintenance,
                sort_by,
            };
            search::execute(&query, options, ctx).await
        }
        Commands::Downloads { package, period } => {
            info!("Fetching download stats: {} ({})", package, period);
            downloads::execute(&package, period, ctx).await
        }
        Commands::Serve => {
            info!("Starting stdio tool server");
            serve::execute(ctx).await
        }
    }
}
