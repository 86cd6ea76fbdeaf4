//! Single-document processing.
//!
//! Drives one source file through the record lifecycle:
//!
//! 1. Resolve the path; a missing file fails without touching the store
//! 2. Skip if the stored record is already `completed`
//! 3. Create or reuse the record, mark it `processing` and save
//! 4. Read bytes and file metadata, extract text, count words
//! 5. Save the record as `completed`
//!
//! Any failure after step 2 is written back to the record as `error`
//! before being returned to the caller.

use chrono::{DateTime, Utc};
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::error::{PdfReadError, Result};
use crate::core::indexer::pdf::PdfTextExtractor;
use crate::core::indexer::words::extract_words;
use crate::core::storage::DocumentRepository;
use crate::core::types::{DocumentMetadata, DocumentRecord};

/// Result of a successful `process` call
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessOutcome {
    /// Text was extracted and the record saved as `completed`
    Completed(DocumentRecord),

    /// The record was already `completed` and left untouched
    Skipped(DocumentRecord),
}

impl ProcessOutcome {
    pub fn record(&self) -> &DocumentRecord {
        match self {
            ProcessOutcome::Completed(record) | ProcessOutcome::Skipped(record) => record,
        }
    }

    pub fn into_record(self) -> DocumentRecord {
        match self {
            ProcessOutcome::Completed(record) | ProcessOutcome::Skipped(record) => record,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ProcessOutcome::Skipped(_))
    }
}

/// Processes individual files from the source directory
pub struct DocumentProcessor {
    source_dir: PathBuf,
    repository: Arc<dyn DocumentRepository>,
    extractor: PdfTextExtractor,
}

impl DocumentProcessor {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        repository: Arc<dyn DocumentRepository>,
        extractor: PdfTextExtractor,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            repository,
            extractor,
        }
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn repository(&self) -> &Arc<dyn DocumentRepository> {
        &self.repository
    }

    /// Process one file by name
    ///
    /// # Errors
    ///
    /// * `FileNotFound` - no such file in the source directory; no record
    ///   is created or changed
    /// * `EmptyFile`, `Parse`, `EmptyText`, `Persistence`, `IoError` -
    ///   the record has been saved with `status=error` (best effort)
    pub async fn process(&self, filename: &str) -> Result<ProcessOutcome> {
        let path = self.resolve(filename).await?;

        let existing = self.repository.find_by_filename(filename).await?;
        if let Some(record) = existing.as_ref().filter(|r| !r.needs_processing()) {
            tracing::debug!("Skipping already processed document: {}", filename);
            return Ok(ProcessOutcome::Skipped(record.clone()));
        }

        let mut record = existing.unwrap_or_else(|| DocumentRecord::new(filename, &path));
        record.mark_processing();
        tracing::info!("Processing {}", filename);

        match self.extract_into(&path, &record).await {
            Ok(completed) => {
                tracing::info!(
                    "Completed {} ({} pages, {} unique words)",
                    filename,
                    completed.metadata.as_ref().map(|m| m.pages).unwrap_or(0),
                    completed.unique_words()
                );
                Ok(ProcessOutcome::Completed(completed))
            }
            Err(e) => {
                tracing::warn!("Failed to process {}: {}", filename, e);
                record.mark_error(e.message());
                if let Err(save_err) = self.repository.save(&record).await {
                    tracing::error!(
                        "Could not record error state for {}: {}",
                        filename,
                        save_err
                    );
                }
                Err(e)
            }
        }
    }

    /// Map a filename to a path inside the source directory
    async fn resolve(&self, filename: &str) -> Result<PathBuf> {
        // Only bare filenames; anything else cannot be a source document
        let is_bare = Path::new(filename).file_name().and_then(|n| n.to_str()) == Some(filename);
        if !is_bare {
            return Err(PdfReadError::FileNotFound(filename.to_string()));
        }

        let path = self.source_dir.join(filename);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(PdfReadError::FileNotFound(path.display().to_string())),
        }
    }

    /// Persist the in-flight state, then extract and persist the result
    async fn extract_into(&self, path: &Path, record: &DocumentRecord) -> Result<DocumentRecord> {
        self.repository.save(record).await?;

        let bytes = tokio::fs::read(path).await?;
        let file_meta = tokio::fs::metadata(path).await?;
        if bytes.is_empty() {
            return Err(PdfReadError::EmptyFile(record.filename.clone()));
        }

        let extracted = self.extractor.extract(&record.filename, bytes).await?;
        let words = extract_words(&extracted.text);
        let metadata = DocumentMetadata {
            pages: extracted.page_count,
            file_size_bytes: file_meta.len(),
            created_at: file_created_at(&file_meta),
            processed_at: Utc::now(),
        };

        let mut completed = record.clone();
        completed.mark_completed(extracted.text, words, metadata);
        self.repository.save(&completed).await?;

        Ok(completed)
    }
}

/// File birth time, falling back to modification time where the
/// platform does not report one
fn file_created_at(meta: &Metadata) -> DateTime<Utc> {
    meta.created()
        .or_else(|_| meta.modified())
        .map(DateTime::<Utc>::from)
        .unwrap_or_else(|_| Utc::now())
}
