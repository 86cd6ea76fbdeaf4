//! Batch processing orchestration.
//!
//! Coordinates a full ingestion run:
//! 1. Enumerate candidate files
//! 2. Split them into consecutive batches of `concurrency` files
//! 3. Process each batch concurrently, waiting for the whole batch; the
//!    batch size is the only bound on concurrency
//! 4. Pause between batches
//! 5. Fold every outcome into a [`ProcessingReport`]
//!
//! Per-document failures become report entries; they never abort the
//! run.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::core::error::{PdfReadError, Result};
use crate::core::indexer::processor::{DocumentProcessor, ProcessOutcome};
use crate::core::indexer::FileWalker;
use crate::core::report::ProcessingReport;
use crate::core::types::DocumentStatus;

/// Reduce concurrency for large corpora
///
/// Over 100 files caps it at 3, over 50 at 4; never raises the
/// requested value and never returns zero.
pub fn scaled_concurrency(file_count: usize, requested: usize) -> usize {
    let cap = if file_count > 100 {
        3
    } else if file_count > 50 {
        4
    } else {
        requested
    };
    requested.min(cap).max(1)
}

/// Drives the source corpus through the document processor
pub struct BatchProcessor {
    processor: Arc<DocumentProcessor>,
    walker: FileWalker,
    batch_delay: Duration,
}

impl BatchProcessor {
    /// Create a new batch processor
    ///
    /// # Arguments
    ///
    /// * `processor` - Single-document processor shared by all tasks
    /// * `walker` - Enumerates the processor's source directory
    /// * `batch_delay` - Pause between consecutive batches
    pub fn new(
        processor: Arc<DocumentProcessor>,
        walker: FileWalker,
        batch_delay: Duration,
    ) -> Self {
        Self {
            processor,
            walker,
            batch_delay,
        }
    }

    pub fn processor(&self) -> &Arc<DocumentProcessor> {
        &self.processor
    }

    /// Filenames in the source directory, sorted
    ///
    /// A missing source directory is logged and yields no candidates,
    /// so the run still produces an (empty) report.
    pub fn candidate_files(&self) -> Result<Vec<String>> {
        match self.walker.collect_files(self.processor.source_dir()) {
            Err(PdfReadError::SourceDirNotFound(dir)) => {
                tracing::error!("Source directory not found: {}", dir);
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Process every candidate file
    ///
    /// With `adaptive`, the requested concurrency is reduced for large
    /// corpora via [`scaled_concurrency`].
    pub async fn process_all(
        &self,
        concurrency: usize,
        adaptive: bool,
    ) -> Result<ProcessingReport> {
        let files = self.candidate_files()?;
        let concurrency = if adaptive && concurrency > 0 {
            scaled_concurrency(files.len(), concurrency)
        } else {
            concurrency
        };
        tracing::info!(
            "Found {} documents in {} (concurrency {})",
            files.len(),
            self.processor.source_dir().display(),
            concurrency
        );
        self.process_files(files, concurrency).await
    }

    /// Reprocess every record currently in `error` state
    pub async fn retry_failed(&self, concurrency: usize) -> Result<ProcessingReport> {
        let mut files: Vec<String> = self
            .processor
            .repository()
            .find_by_status(DocumentStatus::Error)
            .await?
            .into_iter()
            .map(|record| record.filename)
            .collect();
        files.sort();

        tracing::info!("Retrying {} failed documents", files.len());
        self.process_files(files, concurrency).await
    }

    /// Process the given filenames in batches
    ///
    /// # Errors
    ///
    /// Only `ConfigError` for a zero concurrency. Per-document failures
    /// are recorded in the returned report.
    pub async fn process_files(
        &self,
        files: Vec<String>,
        concurrency: usize,
    ) -> Result<ProcessingReport> {
        if concurrency == 0 {
            return Err(PdfReadError::ConfigError(
                "Concurrency must be at least 1".to_string(),
            ));
        }

        let start = Instant::now();
        let total = files.len();
        let mut report = ProcessingReport::new(total);

        if total == 0 {
            tracing::info!("No documents to process");
            report.log_summary();
            return Ok(report);
        }

        let total_batches = total.div_ceil(concurrency);

        for batch_start in (0..total).step_by(concurrency) {
            let batch_end = (batch_start + concurrency).min(total);
            let batch_num = batch_start / concurrency + 1;

            log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total);

            let result = self
                .process_batch(&files[batch_start..batch_end], &mut report)
                .await;

            log_batch_complete(batch_num, &result);

            if batch_end < total && !self.batch_delay.is_zero() {
                tokio::time::sleep(self.batch_delay).await;
            }
        }

        tracing::info!(
            "Run complete: {} documents in {}ms",
            total,
            start.elapsed().as_millis()
        );
        report.log_summary();

        Ok(report)
    }

    /// Process one batch concurrently and wait for all of it
    async fn process_batch(
        &self,
        batch: &[String],
        report: &mut ProcessingReport,
    ) -> BatchResult {
        let mut handles = Vec::with_capacity(batch.len());

        for filename in batch {
            let processor = Arc::clone(&self.processor);
            let name = filename.clone();

            let handle = tokio::spawn(async move { processor.process(&name).await });
            handles.push((filename, handle));
        }

        let mut result = BatchResult::default();

        for (filename, handle) in handles {
            match handle.await {
                Ok(Ok(ProcessOutcome::Completed(_))) => {
                    report.record_success();
                    result.success += 1;
                }
                Ok(Ok(ProcessOutcome::Skipped(_))) => {
                    report.record_skip();
                    result.skipped += 1;
                }
                Ok(Err(e)) => {
                    tracing::error!("[{}] {}", filename, e);
                    report.record_failure(filename.as_str(), e.message());
                    result.failed += 1;
                }
                Err(e) => {
                    tracing::error!("[{}] Processing task failed: {}", filename, e);
                    report.record_failure(
                        filename.as_str(),
                        format!("Processing task failed: {e}"),
                    );
                    result.failed += 1;
                }
            }
        }

        result
    }
}

/// Outcome counts for one batch
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
    skipped: usize,
}

fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    tracing::info!(
        "Batch {}/{}: documents {}-{} of {}",
        batch_num,
        total_batches,
        start,
        end,
        total
    );
}

fn log_batch_complete(batch_num: usize, result: &BatchResult) {
    tracing::info!(
        "Batch {} done: {} succeeded, {} failed, {} skipped",
        batch_num,
        result.success,
        result.failed,
        result.skipped
    );
}
