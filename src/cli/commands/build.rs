//! Build command - rebuild the index and report statistics

use crate::cli::output::{colors, format_duration_ms, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {}

/// Execute the build command
pub async fn execute(
    _args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = services.index.rebuild()?;

    match format {
        OutputFormat::Human => {
            println!("{}", colors::success("Index built"));
            println!("  Books:    {}", colors::number(&stats.books.to_string()));
            println!(
                "  Chapters: {}",
                colors::number(&stats.chapters_indexed.to_string())
            );
            println!("  Verses:   {}", colors::number(&stats.verses.to_string()));
            println!("  Duration: {}", format_duration_ms(stats.duration_ms));

            if stats.chapters_skipped > 0 {
                print_warning(&format!(
                    "{} chapter file(s) could not be read and were skipped",
                    stats.chapters_skipped
                ));
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
