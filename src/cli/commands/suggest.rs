//! Suggest command - prefix autocomplete

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SuggestResponse;
use clap::Args;
use std::sync::Arc;

/// Arguments for the suggest command
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Word prefix to complete
    pub prefix: String,

    /// Maximum number of suggestions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Execute the suggest command
pub async fn execute(
    args: SuggestArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let limit = args
        .limit
        .unwrap_or(services.config.search.suggestion_limit);

    let suggestions = services.suggest.suggest(&args.prefix, limit)?;
    let response = SuggestResponse {
        prefix: args.prefix.trim().to_string(),
        suggestions,
    };

    match format {
        OutputFormat::Human => {
            if response.suggestions.is_empty() {
                println!("No suggestions for '{}'", colors::label(&response.prefix));
            } else {
                for word in &response.suggestions {
                    println!("{word}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
