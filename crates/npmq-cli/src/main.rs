//! # npmq-cli
//!
//! Command-line interface for npm registry lookups.
//!
//! This is the main entry point for the npmq tool. It handles command
//! parsing, sets up logging, and dispatches to the appropriate command
//! handler. Without a subcommand it drops into the interactive lookup loop.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use npmq_core::{DownloadPeriod, NpmqError, NpmqResult, SortBy};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Query the npm registry: package info, search and download statistics
#[derive(Parser)]
#[command(name = "npmq", version, about = "npm registry lookup tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one package by exact name
    Info { package: String },
    /// Search packages by free-text query
    Search {
        query: String,
        /// Maximum number of results
        #[arg(long)]
        size: Option<u32>,
        /// Pagination offset
        #[arg(long)]
        from: Option<u32>,
        /// Quality ranking weight
        #[arg(long)]
        quality: Option<f64>,
        /// Popularity ranking weight
        #[arg(long)]
        popularity: Option<f64>,
        /// Maintenance ranking weight
        #[arg(long)]
        maintenance: Option<f64>,
        /// Sort order (optimal, quality, popularity, maintenance, created,
        /// updated, downloads); other values are forwarded to the registry
        #[arg(long)]
        sort_by: Option<SortBy>,
    },
    /// Show download statistics for a package
    Downloads {
        package: String,
        /// Reporting period
        #[arg(long, default_value_t = DownloadPeriod::LastMonth)]
        period: DownloadPeriod,
    },
    /// Serve the lookup tools over stdio
    Serve,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if let Err(error) = run_cli(cli) {
        let formatter = ErrorFormatter::new();
        eprint!("{}", formatter.format_error(&error));
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> NpmqResult<()> {
    // Create Tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        NpmqError::io("Failed to create async runtime".to_string(), e)
    })?;

    rt.block_on(async {
        let ctx = CommandContext::new()?;

        match cli.command {
            Some(command) => commands::dispatch_command(command, &ctx).await,
            None => commands::interactive::execute(&ctx).await,
        }
    })
}

/// Route logs to stderr so serve mode keeps stdout free for the protocol
fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
