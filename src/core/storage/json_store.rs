//! File-backed document repository.
//!
//! One pretty-printed JSON file per record:
//!
//! ```text
//! {data_dir}/documents/
//! ├── report-2023.pdf.json
//! └── scan-0042.pdf.json
//! ```
//!
//! Filenames too long to carry the `.json` suffix within the usual
//! 255-byte file-name limit are stored under a truncated prefix plus a
//! hash of the full name. The real filename always lives inside the
//! record, and listings read it from there.
//!
//! Writes go to a temporary file that is renamed over the record, so a
//! crash mid-write never leaves a truncated record behind. I/O failures
//! are retried according to the [`RetryPolicy`]; before each retry the
//! documents directory is recreated if it has gone missing.

use async_trait::async_trait;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::config::StorageConfig;
use crate::core::error::{PdfReadError, Result};
use crate::core::storage::repository::{count_statuses, sum_word_totals, DocumentRepository};
use crate::core::types::{DocumentRecord, DocumentStatus, StatusCounts, WordTotals};

const DOCUMENTS_DIR: &str = "documents";
const RECORD_SUFFIX: &str = ".json";

// Longest filename stored verbatim; leaves room for ".json.tmp"
const MAX_DIRECT_KEY_BYTES: usize = 200;

// Prefix kept in front of the hash for long filenames
const HASHED_PREFIX_BYTES: usize = 64;

/// Retry settings for repository operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub attempts: u32,

    /// Pause between attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            attempts: config.retry_attempts.max(1),
            delay: Duration::from_millis(config.retry_delay_ms),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}

/// Repository storing each record as a JSON file
pub struct JsonFileRepository {
    documents_dir: PathBuf,
    retry: RetryPolicy,
}

impl JsonFileRepository {
    /// Create a repository rooted at `data_dir`
    ///
    /// The directory is created lazily on first write.
    pub fn new(data_dir: impl AsRef<Path>, retry: RetryPolicy) -> Self {
        Self {
            documents_dir: data_dir.as_ref().join(DOCUMENTS_DIR),
            retry,
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.data_dir, RetryPolicy::from_config(config))
    }

    /// Directory holding the record files
    pub fn documents_dir(&self) -> &Path {
        &self.documents_dir
    }

    fn record_path(&self, filename: &str) -> Result<PathBuf> {
        if filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\'])
        {
            return Err(PdfReadError::Persistence(format!(
                "Invalid document key: '{filename}'"
            )));
        }
        Ok(self.documents_dir.join(record_file_name(filename)))
    }

    /// Run an operation, retrying I/O failures
    async fn with_retry<T, F, Fut>(&self, operation: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(PdfReadError::IoError(e)) if attempt < self.retry.attempts => {
                    tracing::warn!(
                        "{} failed (attempt {}/{}): {}",
                        operation,
                        attempt,
                        self.retry.attempts,
                        e
                    );
                    self.reconnect().await;
                    tokio::time::sleep(self.retry.delay).await;
                    attempt += 1;
                }
                Err(PdfReadError::IoError(e)) => {
                    return Err(PdfReadError::Persistence(format!(
                        "{operation} failed after {attempt} attempt(s): {e}"
                    )));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Recreate the documents directory if it has disappeared
    async fn reconnect(&self) {
        if let Err(e) = tokio::fs::create_dir_all(&self.documents_dir).await {
            tracing::debug!(
                "Could not recreate {}: {}",
                self.documents_dir.display(),
                e
            );
        }
    }

    async fn load_all(&self) -> Result<Vec<DocumentRecord>> {
        self.with_retry("list documents", || read_all_records(&self.documents_dir))
            .await
    }
}

#[async_trait]
impl DocumentRepository for JsonFileRepository {
    async fn find_by_filename(&self, filename: &str) -> Result<Option<DocumentRecord>> {
        let path = self.record_path(filename)?;
        let record = self.with_retry("load document", || read_record(&path)).await?;
        // A hashed key could in theory be shared by two long names
        Ok(record.filter(|r| r.filename == filename))
    }

    async fn save(&self, record: &DocumentRecord) -> Result<()> {
        let path = self.record_path(&record.filename)?;
        let json = serde_json::to_vec_pretty(record)?;
        self.with_retry("save document", || {
            write_record(&self.documents_dir, &path, &json)
        })
        .await
    }

    async fn find_by_status(&self, status: DocumentStatus) -> Result<Vec<DocumentRecord>> {
        let mut records = self.load_all().await?;
        records.retain(|r| r.status == status);
        Ok(records)
    }

    async fn count_by_status(&self) -> Result<StatusCounts> {
        Ok(count_statuses(&self.load_all().await?))
    }

    async fn aggregate_word_totals(&self) -> Result<WordTotals> {
        Ok(sum_word_totals(&self.load_all().await?))
    }

    async fn find_all(&self) -> Result<Vec<DocumentRecord>> {
        self.load_all().await
    }
}

/// On-disk name of the record file for `filename`
fn record_file_name(filename: &str) -> String {
    if filename.len() <= MAX_DIRECT_KEY_BYTES {
        return format!("{filename}{RECORD_SUFFIX}");
    }

    let mut cut = HASHED_PREFIX_BYTES;
    while !filename.is_char_boundary(cut) {
        cut -= 1;
    }
    let hash = blake3::hash(filename.as_bytes()).to_hex();
    format!("{}~{}{RECORD_SUFFIX}", &filename[..cut], &hash[..16])
}

async fn read_record(path: &Path) -> Result<Option<DocumentRecord>> {
    match tokio::fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes).map(Some).map_err(|e| {
            PdfReadError::Persistence(format!("Corrupt record {}: {e}", path.display()))
        }),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn write_record(dir: &Path, path: &Path, json: &[u8]) -> Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, json).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

async fn read_all_records(dir: &Path) -> Result<Vec<DocumentRecord>> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let is_record = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(RECORD_SUFFIX))
            .unwrap_or(false);
        if !is_record {
            continue;
        }

        match read_record(&path).await {
            Ok(Some(record)) => records.push(record),
            Ok(None) => {}
            Err(PdfReadError::Persistence(msg)) => {
                tracing::warn!("Skipping unreadable record: {}", msg);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(records)
}
