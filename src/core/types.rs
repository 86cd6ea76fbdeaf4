//! Core data types for pdfread.
//!
//! This module defines the persisted document record, its status
//! lifecycle and the word-frequency entries extracted from each
//! document, together with the aggregate views the repository can
//! compute (status counts, word totals, paginated listings).
//!
//! Serialized field names are camelCase; this is the shape written by
//! the JSON store and emitted by `--format json`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::core::error::PdfReadError;

/// Processing status of a document record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Completed,
    Error,
}

impl DocumentStatus {
    /// All statuses in lifecycle order
    pub const ALL: [DocumentStatus; 4] = [
        DocumentStatus::Pending,
        DocumentStatus::Processing,
        DocumentStatus::Completed,
        DocumentStatus::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Processing => "processing",
            DocumentStatus::Completed => "completed",
            DocumentStatus::Error => "error",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = PdfReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(DocumentStatus::Pending),
            "processing" => Ok(DocumentStatus::Processing),
            "completed" => Ok(DocumentStatus::Completed),
            "error" => Ok(DocumentStatus::Error),
            other => Err(PdfReadError::InvalidQuery(format!(
                "Unknown status '{other}'. Valid values: pending, processing, completed, error"
            ))),
        }
    }
}

/// Coarse location of a word within a document
///
/// `page` is derived from the token index (100 tokens per page), not
/// from the real page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPosition {
    pub page: usize,
    pub position: usize,
}

/// A word and its frequency within one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Lowercased token, letters and digits only
    pub word: String,

    /// Number of occurrences in the document
    pub count: usize,

    /// Position of the first occurrence
    pub positions: Vec<WordPosition>,
}

/// File and extraction metadata for a completed document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// Page count reported by the parser
    pub pages: usize,

    /// Source file size in bytes
    pub file_size_bytes: u64,

    /// Source file birth time (falls back to modification time)
    pub created_at: DateTime<Utc>,

    /// When extraction finished
    pub processed_at: DateTime<Utc>,
}

/// Persisted record for one source file, keyed by filename
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    /// Unique key
    pub filename: String,

    /// Full path of the source file when the record was created
    pub original_path: PathBuf,

    /// Extracted text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Word-frequency table in first-seen order
    #[serde(default)]
    pub words: Vec<WordEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DocumentMetadata>,

    pub status: DocumentStatus,

    /// Failure description, present only when status is `error`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Record creation time
    pub created_at: DateTime<Utc>,

    /// Last persisted mutation
    pub updated_at: DateTime<Utc>,
}

impl DocumentRecord {
    /// Create a new pending record
    pub fn new(filename: impl Into<String>, original_path: impl Into<PathBuf>) -> Self {
        let now = Utc::now();
        Self {
            filename: filename.into(),
            original_path: original_path.into(),
            content: None,
            words: Vec::new(),
            metadata: None,
            status: DocumentStatus::Pending,
            error: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == DocumentStatus::Completed
    }

    /// Anything short of `completed` is reprocessable, including records
    /// left in `processing` by an interrupted run.
    pub fn needs_processing(&self) -> bool {
        !self.is_completed()
    }

    /// Transition to `processing` and clear any previous error
    pub fn mark_processing(&mut self) {
        self.status = DocumentStatus::Processing;
        self.error = None;
        self.updated_at = Utc::now();
    }

    /// Transition to `completed` with the extraction results
    pub fn mark_completed(
        &mut self,
        content: String,
        words: Vec<WordEntry>,
        metadata: DocumentMetadata,
    ) {
        self.content = Some(content);
        self.words = words;
        self.metadata = Some(metadata);
        self.status = DocumentStatus::Completed;
        self.error = None;
        self.updated_at = Utc::now();
    }

    /// Transition to `error`, keeping content from any earlier success
    pub fn mark_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status = DocumentStatus::Error;
        self.error = Some(if message.trim().is_empty() {
            "Unknown processing error".to_string()
        } else {
            message
        });
        self.updated_at = Utc::now();
    }

    /// Processing timestamp, if the record was ever completed
    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.metadata.as_ref().map(|m| m.processed_at)
    }

    /// Number of distinct words
    pub fn unique_words(&self) -> usize {
        self.words.len()
    }
}

/// Number of records per status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub error: usize,
}

impl StatusCounts {
    pub fn get(&self, status: DocumentStatus) -> usize {
        match status {
            DocumentStatus::Pending => self.pending,
            DocumentStatus::Processing => self.processing,
            DocumentStatus::Completed => self.completed,
            DocumentStatus::Error => self.error,
        }
    }

    pub fn increment(&mut self, status: DocumentStatus) {
        match status {
            DocumentStatus::Pending => self.pending += 1,
            DocumentStatus::Processing => self.processing += 1,
            DocumentStatus::Completed => self.completed += 1,
            DocumentStatus::Error => self.error += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.processing + self.completed + self.error
    }
}

/// Word statistics across all records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTotals {
    /// Sum of every word count in every record
    pub total_words: u64,

    /// Distinct words across all records
    pub unique_words: usize,
}

/// One page of a document listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentPage {
    pub documents: Vec<DocumentRecord>,
    pub pagination: Pagination,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
}

impl Pagination {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// Keyword search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub documents: Vec<DocumentRecord>,

    /// Matches before `limit` was applied
    pub total: usize,
    pub duration_ms: u64,
}

/// Repository-wide statistics
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub status_counts: StatusCounts,
    pub word_totals: WordTotals,
}
