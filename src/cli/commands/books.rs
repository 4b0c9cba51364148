//! Books command - list the books of the corpus

use crate::cli::output::colors;
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::BooksResponse;
use clap::Args;
use std::sync::Arc;

/// Arguments for the books command
#[derive(Args, Debug)]
pub struct BooksArgs {}

/// Execute the books command
pub async fn execute(
    _args: BooksArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let books = services.index.loader().discover_books()?;
    let response = BooksResponse { books };

    match format {
        OutputFormat::Human => {
            if response.books.is_empty() {
                println!("No books found in the corpus");
            } else {
                println!(
                    "{} book(s):",
                    colors::number(&response.books.len().to_string())
                );
                for book in &response.books {
                    println!("  {book}");
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
