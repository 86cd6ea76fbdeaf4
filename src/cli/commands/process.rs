//! Process commands - run the ingestion pipeline
//!
//! - `process-all`: every PDF in the source directory
//! - `process-one`: a single file by name
//! - `retry-failed`: every record currently in error state

use crate::cli::output::{self, colors, format_bytes, format_duration};
use crate::cli::OutputFormat;
use crate::core::indexer::ProcessOutcome;
use crate::core::report::ProcessingReport;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Arguments for process-all
#[derive(Args, Debug)]
pub struct ProcessAllArgs {
    /// Documents processed concurrently per batch (default from config)
    #[arg(long, short = 'c')]
    pub concurrency: Option<usize>,

    /// Lower concurrency automatically for large directories
    #[arg(long)]
    pub adaptive: bool,

    /// Directory to scan instead of the configured one
    #[arg(long, short = 'd')]
    pub source_dir: Option<PathBuf>,
}

/// Arguments for process-one
#[derive(Args, Debug)]
pub struct ProcessOneArgs {
    /// Filename inside the source directory
    pub filename: String,
}

/// Arguments for retry-failed
#[derive(Args, Debug)]
pub struct RetryArgs {
    /// Documents processed concurrently per batch (default from config)
    #[arg(long, short = 'c')]
    pub concurrency: Option<usize>,
}

/// Run report with timing
#[derive(Debug, Serialize)]
pub struct RunResponse {
    #[serde(flatten)]
    pub report: ProcessingReport,
    pub duration_secs: f64,
}

/// Single document result
#[derive(Debug, Serialize)]
pub struct ProcessOneResponse {
    pub filename: String,
    pub status: String,
    pub pages: usize,
    pub file_size_bytes: u64,
    pub unique_words: usize,
    /// Stored record was already completed; nothing was parsed
    pub skipped: bool,
}

impl ProcessOneResponse {
    pub fn from_outcome(outcome: &ProcessOutcome) -> Self {
        let record = outcome.record();
        let metadata = record.metadata.as_ref();
        Self {
            filename: record.filename.clone(),
            status: record.status.to_string(),
            pages: metadata.map(|m| m.pages).unwrap_or(0),
            file_size_bytes: metadata.map(|m| m.file_size_bytes).unwrap_or(0),
            unique_words: record.unique_words(),
            skipped: outcome.is_skipped(),
        }
    }

    /// One-line summary for human output
    pub fn headline(&self) -> String {
        if self.skipped {
            format!("{} already processed", self.filename)
        } else {
            format!("Processed {}", self.filename)
        }
    }
}

/// Execute process-all
pub async fn execute_all(
    args: ProcessAllArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.concurrency == Some(0) {
        return Err("Concurrency must be at least 1.".into());
    }

    if format == OutputFormat::Human {
        eprintln!(
            "Processing documents in {}...",
            colors::file_path(&services.config.ingest.source_dir.display().to_string())
        );
    }

    let start = Instant::now();
    let report = services.process_all(args.concurrency, args.adaptive).await?;

    print_run(report, start, format)
}

/// Execute retry-failed
pub async fn execute_retry(
    args: RetryArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.concurrency == Some(0) {
        return Err("Concurrency must be at least 1.".into());
    }

    let start = Instant::now();
    let report = services.retry_failed(args.concurrency).await?;

    if report.total == 0 && format == OutputFormat::Human {
        output::print_success("No failed documents to retry.");
        return Ok(());
    }

    print_run(report, start, format)
}

/// Execute process-one
pub async fn execute_one(
    args: ProcessOneArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = services.process_one(&args.filename).await?;
    let response = ProcessOneResponse::from_outcome(&outcome);
    let record = outcome.record();

    match format {
        OutputFormat::Human => {
            if response.skipped {
                output::print_warning(&response.headline());
            } else {
                output::print_success(&response.headline());
            }
            println!();
            println!(
                "  {}   {}",
                colors::label("Status:"),
                colors::status(record.status)
            );
            println!(
                "  {}    {}",
                colors::label("Pages:"),
                colors::number(&response.pages.to_string())
            );
            println!(
                "  {}     {}",
                colors::label("Size:"),
                colors::number(&format_bytes(response.file_size_bytes))
            );
            println!(
                "  {}    {}",
                colors::label("Words:"),
                colors::number(&response.unique_words.to_string())
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

fn print_run(
    report: ProcessingReport,
    start: Instant,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let duration_secs = start.elapsed().as_secs_f64();

    match format {
        OutputFormat::Human => {
            output::print_report(&report);
            println!(
                "Finished in {}",
                colors::number(&format_duration(duration_secs))
            );
        }
        OutputFormat::Json => {
            let response = RunResponse {
                report,
                duration_secs,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
