//! Document commands - inspect stored records
//!
//! - `show`: one record with its top words
//! - `list-documents`: paginated listing, newest first
//! - `list-errors`: records whose last attempt failed

use crate::cli::output::{
    colors, format_bytes, format_relative_time, print_success, print_warning, status_marker,
};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::{DocumentRecord, DocumentStatus, Pagination};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Filename of the stored document
    pub filename: String,

    /// Number of most frequent words to show
    #[arg(long, short = 'w', default_value_t = 10)]
    pub words: usize,
}

/// Arguments for the list-documents command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only list documents with this status (pending, processing, completed, error)
    #[arg(long, short = 's')]
    pub status: Option<DocumentStatus>,

    /// Page number, starting at 1
    #[arg(long, short = 'p', default_value_t = 1)]
    pub page: usize,

    /// Documents per page (default from config)
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

/// Arguments for the list-errors command
#[derive(Args, Debug)]
pub struct ErrorsArgs {}

/// Listing row
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub filename: String,
    pub status: String,
    pub pages: Option<usize>,
    pub file_size_bytes: Option<u64>,
    pub unique_words: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&DocumentRecord> for DocumentSummary {
    fn from(record: &DocumentRecord) -> Self {
        Self {
            filename: record.filename.clone(),
            status: record.status.to_string(),
            pages: record.metadata.as_ref().map(|m| m.pages),
            file_size_bytes: record.metadata.as_ref().map(|m| m.file_size_bytes),
            unique_words: record.unique_words(),
            error: record.error.clone(),
            created_at: record.created_at.to_rfc3339(),
            updated_at: record.updated_at.to_rfc3339(),
        }
    }
}

/// Execute the show command
pub async fn execute_show(
    args: ShowArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let record = services.get_document(&args.filename).await?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {}",
                colors::filename(&record.filename),
                status_marker(record.status)
            );
            println!(
                "  {} {}",
                colors::label("Path:"),
                colors::file_path(&record.original_path.display().to_string())
            );
            if let Some(meta) = &record.metadata {
                println!(
                    "  {} {}",
                    colors::label("Pages:"),
                    colors::number(&meta.pages.to_string())
                );
                println!(
                    "  {} {}",
                    colors::label("Size:"),
                    colors::number(&format_bytes(meta.file_size_bytes))
                );
                println!(
                    "  {} {}",
                    colors::label("Processed:"),
                    format_relative_time(&meta.processed_at)
                );
            }
            if let Some(error) = &record.error {
                println!("  {} {}", colors::label("Error:"), colors::error(error));
            }

            let mut top: Vec<_> = record.words.iter().collect();
            top.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
            top.truncate(args.words);
            if !top.is_empty() {
                println!();
                println!(
                    "{} ({} unique)",
                    colors::label("Top words"),
                    colors::number(&record.unique_words().to_string())
                );
                for entry in top {
                    println!(
                        "  {:<20} {}",
                        entry.word,
                        colors::number(&entry.count.to_string())
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}

/// Execute the list-documents command
pub async fn execute_list(
    args: ListArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let page = services
        .list_documents(args.status, args.page, args.limit)
        .await?;

    match format {
        OutputFormat::Human => {
            if page.documents.is_empty() {
                print_warning("No documents found.");
                return Ok(());
            }

            for record in &page.documents {
                println!(
                    "  {:<40} {:<12} {}",
                    colors::filename(&record.filename),
                    status_marker(record.status),
                    colors::dim(&format_relative_time(&record.updated_at))
                );
            }
            let p = page.pagination;
            println!();
            println!(
                "Page {} of {} ({} document(s))",
                colors::number(&p.page.to_string()),
                colors::number(&p.pages.to_string()),
                colors::number(&p.total.to_string())
            );
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ListResponse {
                documents: Vec<DocumentSummary>,
                pagination: Pagination,
            }
            let response = ListResponse {
                documents: page.documents.iter().map(DocumentSummary::from).collect(),
                pagination: page.pagination,
            };
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

/// Execute the list-errors command
pub async fn execute_errors(
    _args: ErrorsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = services.documents_with_errors().await?;

    match format {
        OutputFormat::Human => {
            if records.is_empty() {
                print_success("No documents in error state.");
                return Ok(());
            }

            println!(
                "{} document(s) in error state:\n",
                colors::number(&records.len().to_string())
            );
            for (idx, record) in records.iter().enumerate() {
                println!("{}. {}", idx + 1, colors::filename(&record.filename));
                println!(
                    "   Error: {}",
                    colors::error(record.error.as_deref().unwrap_or("unknown error"))
                );
                println!(
                    "   Updated: {}",
                    colors::dim(&format_relative_time(&record.updated_at))
                );
            }
        }
        OutputFormat::Json => {
            let summaries: Vec<DocumentSummary> =
                records.iter().map(DocumentSummary::from).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
    }

    Ok(())
}
