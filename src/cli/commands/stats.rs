//! Stats command - status counts and word totals

use crate::cli::output::{colors, print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::DocumentStatus;
use clap::Args;
use std::sync::Arc;

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {}

/// Execute the stats command
pub async fn execute(
    _args: StatsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let stats = services.stats().await?;

    match format {
        OutputFormat::Human => {
            print_header("Documents by status:");
            for status in DocumentStatus::ALL {
                println!(
                    "  {:<12} {}",
                    colors::status(status),
                    colors::number(&stats.status_counts.get(status).to_string())
                );
            }
            println!(
                "  {:<12} {}",
                colors::label("total"),
                colors::number(&stats.status_counts.total().to_string())
            );
            println!();
            print_header("Words across stored documents:");
            println!(
                "  {:<12} {}",
                "occurrences",
                colors::number(&stats.word_totals.total_words.to_string())
            );
            println!(
                "  {:<12} {}",
                "unique",
                colors::number(&stats.word_totals.unique_words.to_string())
            );
        }
        OutputFormat::Json => print_json(&stats),
    }

    Ok(())
}
