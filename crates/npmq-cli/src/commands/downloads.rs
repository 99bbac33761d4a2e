//! `npmq downloads` command implementation.

use npmq_core::{DownloadPeriod, DownloadStats, NpmqResult};

use super::CommandContext;

/// Execute the `npmq downloads` command
pub async fn execute(
    package: &str,
    period: DownloadPeriod,
    ctx: &CommandContext,
) -> NpmqResult<()> {
    let stats = ctx.registry.download_stats(package, period).await?;
    println!("{}", format_download_stats(&stats));
    Ok(())
}

/// Render download stats as a single summary line
pub fn format_download_stats(stats: &DownloadStats) -> String {
    format!(
        "{}: {} downloads ({} to {})",
        stats.package, stats.downloads, stats.start, stats.end
    )
}
