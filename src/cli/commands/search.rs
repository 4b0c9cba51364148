//! Search command - ranked verse search

use crate::cli::output::{colors, format_reference};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchOptions;
use clap::Args;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search query (two or more characters)
    pub query: String,

    /// Restrict results to one book (exact id)
    #[arg(long, short = 'b')]
    pub book: Option<String>,

    /// Maximum number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Skip the context window of neighboring verses
    #[arg(long)]
    pub no_context: bool,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let opts = SearchOptions {
        book: args.book.clone(),
        limit: args.limit.unwrap_or(services.config.search.default_limit),
        include_context: !args.no_context,
        context_size: services.config.search.context_size,
    };

    let response = services.search.search(&args.query, &opts)?;

    match format {
        OutputFormat::Human => {
            if response.results.is_empty() {
                println!("No results found for '{}'", colors::label(&response.query));
            } else {
                println!(
                    "Found {} result(s){}:\n",
                    colors::number(&response.total.to_string()),
                    if response.has_more {
                        format!(", showing {}", response.results.len())
                    } else {
                        String::new()
                    }
                );

                for (i, hit) in response.results.iter().enumerate() {
                    println!(
                        "[{}] {} {}",
                        colors::rank(&(i + 1).to_string()),
                        colors::reference(&format_reference(&hit.book, hit.chapter, hit.verse)),
                        colors::score(&format!("(score: {})", hit.score))
                    );
                    println!("    {}", hit.text);

                    for verse in &hit.context {
                        if verse.verse == hit.verse {
                            continue;
                        }
                        println!(
                            "    {}",
                            colors::dim(&format!("{}. {}", verse.verse, verse.text))
                        );
                    }
                    println!();
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
