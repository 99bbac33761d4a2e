//! `npmq search` command implementation.
//!
//! Full-text search with the results printed one per line in upstream order.

use npmq_core::{NpmqResult, SearchEntry, SearchOptions};

use super::CommandContext;

/// Execute the `npmq search` command
pub async fn execute(query: &str, options: SearchOptions, ctx: &CommandContext) -> NpmqResult<()> {
    let results = ctx.registry.search(query, &options).await?;

    if results.is_empty() {
        ctx.output.info("No packages matched");
        return Ok(());
    }

    for entry in &results {
        println!("{}", format_search_entry(entry));
    }
    ctx.output
        .info(&format!("{} result(s) for '{query}'", results.len()));
    Ok(())
}

/// One line per match: name@version, description, optional monthly downloads
pub fn format_search_entry(entry: &SearchEntry) -> String {
    let mut line = format!("{}@{}", entry.name, entry.version);
    if let Some(description) = &entry.description {
        line.push_str(&format!("  {description}"));
    }
    if let Some(monthly) = entry.downloads.as_ref().and_then(|d| d.monthly) {
        line.push_str(&format!("  ({monthly} downloads/month)"));
    }
    line
}
