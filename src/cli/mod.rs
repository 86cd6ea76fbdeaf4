//! CLI adapter for pdfread
//!
//! Provides the command-line interface for ingesting documents and
//! querying the stored records. Depends on `core/`; `core/` never
//! depends on it.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// pdfread - Batch PDF ingestion and keyword search
///
/// Extracts text and word frequencies from every PDF in a directory,
/// stores one record per file, and searches the stored records.
#[derive(Parser, Debug)]
#[command(name = "pdfread")]
#[command(version)]
#[command(about = "Batch PDF ingestion and keyword search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process every PDF in the source directory
    #[command(name = "process-all")]
    ProcessAll(commands::process::ProcessAllArgs),

    /// Process a single PDF by filename
    #[command(name = "process-one")]
    ProcessOne(commands::process::ProcessOneArgs),

    /// Reprocess every document whose last attempt failed
    #[command(name = "retry-failed")]
    RetryFailed(commands::process::RetryArgs),

    /// Search processed documents by keyword
    Search(commands::SearchArgs),

    /// Show one stored document
    Show(commands::documents::ShowArgs),

    /// List stored documents, newest first
    #[command(name = "list-documents")]
    ListDocuments(commands::documents::ListArgs),

    /// List documents in error state
    #[command(name = "list-errors")]
    ListErrors(commands::documents::ErrorsArgs),

    /// Show status counts and word totals
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  pdfread completions bash > ~/.local/share/bash-completion/completions/pdfread
    ///   zsh:   pdfread completions zsh > ~/.zfunc/_pdfread
    ///   fish:  pdfread completions fish > ~/.config/fish/completions/pdfread.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Initialize XDG directories
    let xdg = XdgDirs::new();
    xdg.ensure_dirs_exist()?;
    xdg.log_paths();

    // Load configuration
    let mut config = Config::load_with_xdg(&xdg)?;
    if let Commands::ProcessAll(args) = &cli.command {
        if let Some(dir) = &args.source_dir {
            config.ingest.source_dir = dir.clone();
        }
    }
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config));

    // Execute command
    match cli.command {
        Commands::ProcessAll(args) => {
            commands::process::execute_all(args, &services, cli.format).await
        }
        Commands::ProcessOne(args) => {
            commands::process::execute_one(args, &services, cli.format).await
        }
        Commands::RetryFailed(args) => {
            commands::process::execute_retry(args, &services, cli.format).await
        }
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Show(args) => {
            commands::documents::execute_show(args, &services, cli.format).await
        }
        Commands::ListDocuments(args) => {
            commands::documents::execute_list(args, &services, cli.format).await
        }
        Commands::ListErrors(args) => {
            commands::documents::execute_errors(args, &services, cli.format).await
        }
        Commands::Stats(args) => commands::stats::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
