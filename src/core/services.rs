//! Unified service container for pdfread
//!
//! Provides shared access to all core services.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::indexer::{
    BatchProcessor, DefaultPdfParser, DocumentProcessor, FileWalker, PdfParser, PdfTextExtractor,
    ProcessOutcome,
};
use crate::core::report::ProcessingReport;
use crate::core::search::SearchService;
use crate::core::storage::{DocumentRepository, JsonFileRepository};
use crate::core::types::{
    DocumentPage, DocumentRecord, DocumentStatus, SearchResponse, StatsOverview,
};

/// Unified services container
///
/// All adapters use this same struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Record store shared by every component
    pub repository: Arc<dyn DocumentRepository>,

    /// Batch orchestrator (owns the single-document processor)
    pub pipeline: Arc<BatchProcessor>,

    /// Keyword search and listings
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,

    /// Report of the most recent run in this process
    last_report: Arc<RwLock<ProcessingReport>>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Records are stored as JSON files under `storage.data_dir`.
    pub fn new(config: Config) -> Self {
        let repository: Arc<dyn DocumentRepository> =
            Arc::new(JsonFileRepository::from_config(&config.storage));
        Self::with_components(config, repository, Arc::new(DefaultPdfParser))
    }

    /// Create services around an explicit repository and parser
    pub fn with_components(
        config: Config,
        repository: Arc<dyn DocumentRepository>,
        parser: Arc<dyn PdfParser>,
    ) -> Self {
        let processor = Arc::new(DocumentProcessor::new(
            config.ingest.source_dir.clone(),
            Arc::clone(&repository),
            PdfTextExtractor::new(parser),
        ));

        let pipeline = Arc::new(BatchProcessor::new(
            processor,
            FileWalker::new(&config.ingest.extension),
            Duration::from_millis(config.ingest.batch_delay_ms),
        ));

        let search = Arc::new(SearchService::new(Arc::clone(&repository), &config.search));

        Self {
            repository,
            pipeline,
            search,
            config: Arc::new(config),
            last_report: Arc::new(RwLock::new(ProcessingReport::default())),
        }
    }

    /// Process every file in the source directory
    ///
    /// `concurrency` defaults to `ingest.concurrency`.
    pub async fn process_all(
        &self,
        concurrency: Option<usize>,
        adaptive: bool,
    ) -> Result<ProcessingReport> {
        let concurrency = concurrency.unwrap_or(self.config.ingest.concurrency);
        let report = self.pipeline.process_all(concurrency, adaptive).await?;
        self.remember(&report).await;
        Ok(report)
    }

    /// Process a single file by name
    ///
    /// An already completed document comes back as
    /// [`ProcessOutcome::Skipped`] without being parsed again.
    pub async fn process_one(&self, filename: &str) -> Result<ProcessOutcome> {
        self.pipeline.processor().process(filename).await
    }

    /// Reprocess every record in `error` state
    pub async fn retry_failed(&self, concurrency: Option<usize>) -> Result<ProcessingReport> {
        let concurrency = concurrency.unwrap_or(self.config.ingest.concurrency);
        let report = self.pipeline.retry_failed(concurrency).await?;
        self.remember(&report).await;
        Ok(report)
    }

    /// Report of the last run, or an empty report before any run
    pub async fn error_report(&self) -> ProcessingReport {
        self.last_report.read().await.clone()
    }

    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        limit: Option<usize>,
        literal: bool,
    ) -> Result<SearchResponse> {
        self.search.search_by_keyword(keyword, limit, literal).await
    }

    pub async fn list_documents(
        &self,
        status: Option<DocumentStatus>,
        page: usize,
        limit: Option<usize>,
    ) -> Result<DocumentPage> {
        self.search.list_documents(status, page, limit).await
    }

    pub async fn documents_with_errors(&self) -> Result<Vec<DocumentRecord>> {
        self.search.documents_with_errors().await
    }

    pub async fn get_document(&self, filename: &str) -> Result<DocumentRecord> {
        self.search.get_document(filename).await
    }

    /// Status counts and word totals across the repository
    pub async fn stats(&self) -> Result<StatsOverview> {
        Ok(StatsOverview {
            status_counts: self.repository.count_by_status().await?,
            word_totals: self.repository.aggregate_word_totals().await?,
        })
    }

    async fn remember(&self, report: &ProcessingReport) {
        *self.last_report.write().await = report.clone();
    }
}
