// Integration tests for the JSON record store

use crate::common::{create_test_services, test_config, StubParser, TestCorpus};
use pdfread::core::services::Services;
use pdfread::core::storage::{DocumentRepository, JsonFileRepository};
use pdfread::core::types::DocumentStatus;
use std::sync::Arc;
use tempfile::TempDir;

fn services_over(corpus: &TestCorpus, data_dir: &TempDir) -> Services {
    let config = test_config(corpus.path(), data_dir.path());
    let repository: Arc<dyn DocumentRepository> =
        Arc::new(JsonFileRepository::from_config(&config.storage));
    Services::with_components(config, repository, Arc::new(StubParser::default()))
}

#[tokio::test]
async fn test_records_survive_restart() {
    let corpus = TestCorpus::with_files(&[("kept.pdf", "durable words survive restarts")]);
    let data_dir = TempDir::new().unwrap();

    let first = services_over(&corpus, &data_dir);
    let report = first.process_all(Some(1), false).await.unwrap();
    assert_eq!(report.successful, 1);
    drop(first);

    // A new process sees the completed record and skips it
    let second = services_over(&corpus, &data_dir);
    let report = second.process_all(Some(1), false).await.unwrap();
    assert_eq!(report.skipped, 1);

    let record = second.get_document("kept.pdf").await.unwrap();
    assert_eq!(record.status, DocumentStatus::Completed);
    assert!(record.words.iter().any(|w| w.word == "durable"));
}

#[tokio::test]
async fn test_one_file_per_document() {
    let corpus = TestCorpus::numbered(3);
    let (services, _parser, data_dir) = create_test_services(corpus.path());

    services.process_all(Some(2), false).await.unwrap();

    let documents_dir = data_dir.path().join("documents");
    let mut names: Vec<String> = std::fs::read_dir(&documents_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["doc_000.pdf.json", "doc_001.pdf.json", "doc_002.pdf.json"]
    );
}

#[tokio::test]
async fn test_stored_json_uses_camel_case_fields() {
    let corpus = TestCorpus::with_files(&[("shape.pdf", "inspect the stored shape")]);
    let (services, _parser, data_dir) = create_test_services(corpus.path());
    services.process_one("shape.pdf").await.unwrap();

    let raw =
        std::fs::read_to_string(data_dir.path().join("documents").join("shape.pdf.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["status"], "completed");
    assert_eq!(value["filename"], "shape.pdf");
    assert!(value.get("originalPath").is_some());
    assert!(value["metadata"].get("fileSizeBytes").is_some());
}

#[tokio::test]
async fn test_corrupt_record_skipped_in_listings() {
    let corpus = TestCorpus::numbered(2);
    let (services, _parser, data_dir) = create_test_services(corpus.path());
    services.process_all(Some(2), false).await.unwrap();

    std::fs::write(
        data_dir.path().join("documents").join("garbage.pdf.json"),
        "{ not json",
    )
    .unwrap();

    let page = services.list_documents(None, 1, None).await.unwrap();
    assert_eq!(page.pagination.total, 2);

    let stats = services.stats().await.unwrap();
    assert_eq!(stats.status_counts.total(), 2);

    // Direct lookup surfaces the damage instead of hiding it
    assert!(services.get_document("garbage.pdf").await.is_err());
}

#[tokio::test]
async fn test_long_filename_failure_is_recorded_and_retried() {
    let long_name = format!("{}.pdf", "r".repeat(246));
    let mut corpus = TestCorpus::with_files(&[(long_name.as_str(), "CORRUPT")]);
    let (services, _parser, data_dir) = create_test_services(corpus.path());

    let report = services.process_all(Some(1), false).await.unwrap();
    assert_eq!(report.failed, 1);

    let errors = services.documents_with_errors().await.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].filename, long_name);
    for entry in std::fs::read_dir(data_dir.path().join("documents")).unwrap() {
        assert!(entry.unwrap().file_name().len() < 255);
    }

    corpus.add(&long_name, "repaired long document");
    let report = services.retry_failed(Some(1)).await.unwrap();
    assert_eq!(report.successful, 1);

    let record = services.get_document(&long_name).await.unwrap();
    assert_eq!(record.status, DocumentStatus::Completed);
}
