//! Search command - keyword search over stored documents

use crate::cli::output::{colors, status_marker, truncate};
use crate::cli::OutputFormat;
use crate::core::search::build_matcher;
use crate::core::services::Services;
use crate::core::types::DocumentRecord;
use clap::Args;
use regex::Regex;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Keyword or case-insensitive regular expression
    pub keyword: String,

    /// Maximum number of results (default from config)
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Match the keyword literally, without regex syntax
    #[arg(long)]
    pub literal: bool,

    /// Only show filenames
    #[arg(long)]
    pub files_only: bool,
}

/// Search result item
#[derive(Debug, Serialize)]
pub struct SearchResultItem {
    pub rank: usize,
    pub filename: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_at: Option<String>,
    pub matching_words: Vec<WordHit>,
}

/// A matching word and its count in the document
#[derive(Debug, Serialize)]
pub struct WordHit {
    pub word: String,
    pub count: usize,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput {
    pub query: String,
    pub total_results: usize,
    pub duration_ms: u64,
    pub results: Vec<SearchResultItem>,
}

// Matching words shown per result
const MAX_WORD_HITS: usize = 5;

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = services
        .search_by_keyword(&args.keyword, args.limit, args.literal)
        .await?;

    let matcher = build_matcher(
        &args.keyword,
        args.literal,
        services.config.search.max_query_length,
    )?;

    let output = SearchResponseOutput {
        query: response.query.clone(),
        total_results: response.total,
        duration_ms: response.duration_ms,
        results: response
            .documents
            .iter()
            .enumerate()
            .map(|(i, record)| SearchResultItem {
                rank: i + 1,
                filename: record.filename.clone(),
                status: record.status.to_string(),
                processed_at: record.processed_at().map(|t| t.to_rfc3339()),
                matching_words: word_hits(&matcher, record),
            })
            .collect(),
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No documents found for '{}'", colors::label(&output.query));
                return Ok(());
            }

            println!(
                "Found {} document(s) for '{}' (showing {}):\n",
                colors::number(&output.total_results.to_string()),
                colors::label(&output.query),
                colors::number(&output.results.len().to_string())
            );

            for (result, record) in output.results.iter().zip(&response.documents) {
                if args.files_only {
                    println!("{}", colors::filename(&result.filename));
                    continue;
                }

                println!(
                    "[{}] {} {}",
                    colors::rank(&result.rank.to_string()),
                    colors::filename(&result.filename),
                    status_marker(record.status)
                );
                if !result.matching_words.is_empty() {
                    let hits: Vec<String> = result
                        .matching_words
                        .iter()
                        .map(|h| format!("{} ({})", h.word, h.count))
                        .collect();
                    println!("    {}", colors::dim(&hits.join(", ")));
                }
                let snippet = record.content.as_deref().and_then(|c| c.lines().next());
                if let Some(snippet) = snippet {
                    println!("    {}", colors::dim(&truncate(snippet, 100)));
                }
                println!();
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

/// Most frequent words of a record that match the keyword
fn word_hits(matcher: &Regex, record: &DocumentRecord) -> Vec<WordHit> {
    let mut hits: Vec<WordHit> = record
        .words
        .iter()
        .filter(|entry| matcher.is_match(&entry.word))
        .map(|entry| WordHit {
            word: entry.word.clone(),
            count: entry.count,
        })
        .collect();
    hits.sort_by(|a, b| b.count.cmp(&a.count));
    hits.truncate(MAX_WORD_HITS);
    hits
}
