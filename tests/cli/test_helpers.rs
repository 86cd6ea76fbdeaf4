//! Shared helpers for CLI command tests

use crate::common::{create_test_services, TestCorpus};
use pdfread::core::services::Services;
use std::sync::Arc;
use tempfile::TempDir;

/// Handles that must stay alive for the duration of a CLI test
pub struct CliFixture {
    pub services: Arc<Services>,
    pub corpus: TestCorpus,
    _data: TempDir,
}

/// Services over a corpus built from (filename, contents) pairs
pub fn create_cli_fixture(files: &[(&str, &str)]) -> CliFixture {
    let corpus = TestCorpus::with_files(files);
    let (services, _parser, data) = create_test_services(corpus.path());
    CliFixture {
        services: Arc::new(services),
        corpus,
        _data: data,
    }
}

/// Same as [`create_cli_fixture`], with every document processed
pub async fn create_processed_fixture(files: &[(&str, &str)]) -> CliFixture {
    let fixture = create_cli_fixture(files);
    fixture
        .services
        .process_all(Some(2), false)
        .await
        .expect("Processing should succeed");
    fixture
}
