//! Tests for the search command

use crate::cli::test_helpers::create_processed_fixture;
use pdfread::cli::commands::search::{execute, SearchArgs};
use pdfread::cli::OutputFormat;

fn args(keyword: &str) -> SearchArgs {
    SearchArgs {
        keyword: keyword.to_string(),
        limit: None,
        literal: false,
        files_only: false,
    }
}

/// Test search with results in human format
#[tokio::test]
async fn test_search_human() {
    let fixture = create_processed_fixture(&[
        ("a.pdf", "quarterly revenue report"),
        ("b.pdf", "revenue forecast"),
    ])
    .await;

    let result = execute(args("revenue"), &fixture.services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search in JSON format with files-only and limit
#[tokio::test]
async fn test_search_json_limited() {
    let fixture = create_processed_fixture(&[
        ("a.pdf", "quarterly revenue report"),
        ("b.pdf", "revenue forecast"),
    ])
    .await;

    let mut search = args("revenue");
    search.limit = Some(1);
    search.files_only = true;
    let result = execute(search, &fixture.services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// Test search with no matches
#[tokio::test]
async fn test_search_no_results() {
    let fixture = create_processed_fixture(&[("a.pdf", "quarterly revenue report")]).await;

    let result = execute(args("nonexistent_term_xyz"), &fixture.services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// Test that a blank keyword is an error
#[tokio::test]
async fn test_search_blank_keyword() {
    let fixture = create_processed_fixture(&[("a.pdf", "quarterly revenue report")]).await;

    let result = execute(args("  "), &fixture.services, OutputFormat::Human).await;
    assert!(result.is_err());
}
