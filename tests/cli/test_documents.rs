//! Tests for show, list-documents, list-errors, stats and show-config

use crate::cli::test_helpers::{create_cli_fixture, create_processed_fixture};
use pdfread::cli::commands::documents::{
    execute_errors, execute_list, execute_show, ErrorsArgs, ListArgs, ShowArgs,
};
use pdfread::cli::commands::{config, stats, ConfigArgs, StatsArgs};
use pdfread::cli::OutputFormat;
use pdfread::core::types::DocumentStatus;

const FILES: &[(&str, &str)] = &[
    ("good.pdf", "readable words repeated words"),
    ("bad.pdf", "CORRUPT"),
];

#[tokio::test]
async fn test_show_document() {
    let fixture = create_processed_fixture(FILES).await;

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = ShowArgs {
            filename: "good.pdf".to_string(),
            words: 5,
        };
        let result = execute_show(args, &fixture.services, format).await;
        assert!(result.is_ok(), "Show should succeed: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_show_unknown_document() {
    let fixture = create_processed_fixture(FILES).await;

    let args = ShowArgs {
        filename: "unknown.pdf".to_string(),
        words: 5,
    };
    let err = execute_show(args, &fixture.services, OutputFormat::Human)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("Document not found"));
}

#[tokio::test]
async fn test_list_documents() {
    let fixture = create_processed_fixture(FILES).await;

    let args = ListArgs {
        status: Some(DocumentStatus::Completed),
        page: 1,
        limit: Some(10),
    };
    assert!(execute_list(args, &fixture.services, OutputFormat::Json)
        .await
        .is_ok());

    let args = ListArgs {
        status: None,
        page: 1,
        limit: None,
    };
    assert!(execute_list(args, &fixture.services, OutputFormat::Human)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_list_documents_page_zero() {
    let fixture = create_cli_fixture(&[]);

    let args = ListArgs {
        status: None,
        page: 0,
        limit: None,
    };
    assert!(execute_list(args, &fixture.services, OutputFormat::Human)
        .await
        .is_err());
}

#[tokio::test]
async fn test_list_errors() {
    let fixture = create_processed_fixture(FILES).await;

    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute_errors(ErrorsArgs {}, &fixture.services, format).await;
        assert!(result.is_ok());
    }
}

#[tokio::test]
async fn test_stats_and_config() {
    let fixture = create_processed_fixture(FILES).await;

    for format in [OutputFormat::Human, OutputFormat::Json] {
        assert!(stats::execute(StatsArgs {}, &fixture.services, format)
            .await
            .is_ok());
        assert!(
            config::execute(ConfigArgs { all: false }, &fixture.services, format)
                .await
                .is_ok()
        );
    }
}
