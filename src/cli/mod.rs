//! CLI adapter for Lectern
//!
//! Provides a command-line interface for verse search and corpus
//! inspection. This module is parallel to `http/` - both depend on
//! `core/` but not on each other.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Lectern - Verse Search Engine
///
/// Full-text search over a line-structured scripture corpus with
/// heuristic ranking, context windows and autocomplete.
#[derive(Parser, Debug)]
#[command(name = "lectern")]
#[command(version)]
#[command(about = "Verse search engine for scripture corpora", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Corpus root directory (overrides configuration)
    #[arg(long, global = true, env = "LECTERN_CORPUS_DIR")]
    pub corpus: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    Human,
    /// JSON output for scripting
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Human
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search verses with heuristic ranking
    Search(commands::search::SearchArgs),

    /// Autocomplete a word prefix from the corpus
    Suggest(commands::suggest::SuggestArgs),

    /// List the books of the corpus
    Books(commands::books::BooksArgs),

    /// Build the index and print statistics
    Build(commands::build::BuildArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  lectern completions bash > ~/.local/share/bash-completion/completions/lectern
    ///   zsh:   lectern completions zsh > ~/.zfunc/_lectern
    ///   fish:  lectern completions fish > ~/.config/fish/completions/lectern.fish
    Completions(commands::completions::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    let command = match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        other => other,
    };

    // Load configuration
    let mut config = Config::load()?;
    if let Some(corpus) = &cli.corpus {
        config.corpus.root_dir = corpus.clone();
    }

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Suggest(args) => commands::suggest::execute(args, &services, cli.format).await,
        Commands::Books(args) => commands::books::execute(args, &services, cli.format).await,
        Commands::Build(args) => commands::build::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
