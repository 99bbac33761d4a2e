//! Interactive lookup loop.
//!
//! Reads package names from stdin, prints the package info for each, and
//! repeats until EOF or the sentinel input `sair`. Lookup failures are
//! printed and the loop continues.

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use npmq_core::{NpmqError, NpmqResult};

use super::info::format_package_info;
use super::CommandContext;

/// The input that ends the loop, matched case-insensitively
const EXIT_SENTINEL: &str = "sair";

/// Run the interactive lookup loop until EOF or the exit sentinel
pub async fn execute(ctx: &CommandContext) -> NpmqResult<()> {
    ctx.output.step("📦", "Welcome to npmq package lookup!");
    ctx.output
        .info(&format!("Type a package name, or \"{EXIT_SENTINEL}\" to quit"));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\nPackage name: ");
        std::io::stdout()
            .flush()
            .map_err(|e| NpmqError::io("Failed to flush stdout".to_string(), e))?;

        let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| NpmqError::io("Failed to read from stdin".to_string(), e))?
        else {
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if is_exit_command(input) {
            ctx.output.info("Until next time!");
            break;
        }

        match ctx.registry.package_info(input).await {
            Ok(info) => println!("\n{}", format_package_info(&info)),
            Err(error) => {
                ctx.output.error(&error.to_string());
                if let Some(suggestion) = error.suggestion() {
                    ctx.output.info(suggestion);
                }
            }
        }
    }

    Ok(())
}

/// Check whether the input is the exit sentinel
pub fn is_exit_command(input: &str) -> bool {
    input.eq_ignore_ascii_case(EXIT_SENTINEL)
}
