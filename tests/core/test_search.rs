// Integration tests for keyword search and listings

use crate::common::{create_test_services, TestCorpus};
use pdfread::core::types::DocumentStatus;
use pdfread::PdfReadError;

async fn processed_corpus() -> (pdfread::Services, TestCorpus, tempfile::TempDir) {
    let corpus = TestCorpus::with_files(&[
        ("invoice_2023.pdf", "Invoice total amount due"),
        ("contract.pdf", "Service agreement between parties"),
        ("notes.pdf", "Meeting notes about the invoice process"),
        ("broken.pdf", "CORRUPT"),
    ]);
    let (services, _parser, data) = create_test_services(corpus.path());
    services.process_all(Some(2), false).await.unwrap();
    (services, corpus, data)
}

#[tokio::test]
async fn test_search_matches_words_case_insensitively() {
    let (services, _corpus, _data) = processed_corpus().await;

    let response = services.search_by_keyword("INVOICE", None, false).await.unwrap();
    let mut names: Vec<&str> = response
        .documents
        .iter()
        .map(|d| d.filename.as_str())
        .collect();
    names.sort();
    assert_eq!(names, vec!["invoice_2023.pdf", "notes.pdf"]);
    assert_eq!(response.total, 2);
}

#[tokio::test]
async fn test_search_matches_filename() {
    let (services, _corpus, _data) = processed_corpus().await;

    // "broken" only appears in the filename of a failed document
    let response = services.search_by_keyword("broken", None, false).await.unwrap();
    assert_eq!(response.total, 1);
    assert_eq!(response.documents[0].status, DocumentStatus::Error);
}

#[tokio::test]
async fn test_search_regex_and_literal() {
    let (services, _corpus, _data) = processed_corpus().await;

    let regex = services.search_by_keyword("^agree", None, false).await.unwrap();
    assert_eq!(regex.total, 1);
    assert_eq!(regex.documents[0].filename, "contract.pdf");

    // Literal mode treats the caret as text
    let literal = services.search_by_keyword("^agree", None, true).await.unwrap();
    assert_eq!(literal.total, 0);

    // Invalid patterns fall back to a literal match instead of failing
    let fallback = services.search_by_keyword("invoice(", None, false).await;
    assert!(fallback.is_ok());
}

#[tokio::test]
async fn test_search_limit_keeps_total() {
    let corpus = TestCorpus::numbered(8);
    let (services, _parser, _data) = create_test_services(corpus.path());
    services.process_all(Some(4), false).await.unwrap();

    let response = services
        .search_by_keyword("vocabulary", Some(3), false)
        .await
        .unwrap();
    assert_eq!(response.documents.len(), 3);
    assert_eq!(response.total, 8);
}

#[tokio::test]
async fn test_search_rejects_blank_keyword() {
    let (services, _corpus, _data) = processed_corpus().await;

    let err = services.search_by_keyword("   ", None, false).await.unwrap_err();
    assert!(matches!(err, PdfReadError::InvalidQuery(_)));
}

#[tokio::test]
async fn test_list_documents_by_status_and_page() {
    let (services, _corpus, _data) = processed_corpus().await;

    let completed = services
        .list_documents(Some(DocumentStatus::Completed), 1, None)
        .await
        .unwrap();
    assert_eq!(completed.pagination.total, 3);
    assert!(completed
        .documents
        .iter()
        .all(|d| d.status == DocumentStatus::Completed));

    let second_page = services.list_documents(None, 2, Some(3)).await.unwrap();
    assert_eq!(second_page.pagination.pages, 2);
    assert_eq!(second_page.documents.len(), 1);

    let beyond = services.list_documents(None, 5, Some(3)).await.unwrap();
    assert!(beyond.documents.is_empty());
}

#[tokio::test]
async fn test_documents_with_errors_and_stats() {
    let (services, _corpus, _data) = processed_corpus().await;

    let errors = services.documents_with_errors().await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].filename, "broken.pdf");

    let stats = services.stats().await.unwrap();
    assert_eq!(stats.status_counts.completed, 3);
    assert_eq!(stats.status_counts.error, 1);
    assert!(stats.word_totals.total_words > 0);
    assert!(stats.word_totals.unique_words <= stats.word_totals.total_words as usize);
}
