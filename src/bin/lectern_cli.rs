//! Lectern CLI - Command-line interface for verse search
//!
//! A direct command-line interface for searching and inspecting a
//! scripture corpus. Use this for scripting or manual lookups
//! without running the HTTP server.
//!
//! # Examples
//!
//! ```bash
//! # Search the corpus
//! lectern search "so loved" --book John
//!
//! # Autocomplete a prefix
//! lectern suggest begi
//!
//! # List books
//! lectern books
//!
//! # Build the index and print statistics
//! lectern build
//! ```

use clap::Parser;
use lectern::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
