//! pdfread CLI - batch PDF ingestion and keyword search
//!
//! # Examples
//!
//! ```bash
//! # Process every PDF in the configured source directory
//! pdfread process-all --concurrency 4
//!
//! # Process a single file
//! pdfread process-one report.pdf
//!
//! # Reprocess failures from earlier runs
//! pdfread retry-failed
//!
//! # Search stored documents
//! pdfread search "invoice" --limit 5
//! ```
//!
//! Logs go to stderr. Set `RUST_LOG` to change the level and
//! `PDFREAD_LOG_FORMAT=json` for structured output.

use clap::Parser;
use pdfread::cli::output::print_error;
use pdfread::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "pdfread=info".into());
    let json = std::env::var("PDFREAD_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
