//! `npmq info` command implementation.
//!
//! Looks up one package by exact name and prints its reshaped info.

use npmq_core::{NpmqResult, PackageInfo};

use super::CommandContext;

/// Execute the `npmq info` command
pub async fn execute(package: &str, ctx: &CommandContext) -> NpmqResult<()> {
    let info = ctx.registry.package_info(package).await?;
    println!("{}", format_package_info(&info));
    Ok(())
}

/// Render package info as a field-per-line block with the dependency map
/// pretty-printed at the end
pub fn format_package_info(info: &PackageInfo) -> String {
    let mut out = String::new();
    out.push_str(&format!("name: {}\n", info.name));
    out.push_str(&format!("version: {}\n", info.version));
    for (label, value) in [
        ("description", &info.description),
        ("author", &info.author),
        ("homepage", &info.homepage),
        ("repository", &info.repository),
    ] {
        if let Some(value) = value {
            out.push_str(&format!("{label}: {value}\n"));
        }
    }

    out.push_str("\nDependencies:\n");
    let rendered = serde_json::to_string_pretty(&info.dependencies)
        .unwrap_or_else(|_| "{}".to_string());
    out.push_str(&rendered);
    out
}
