//! Document record repository abstraction.

use async_trait::async_trait;
use std::collections::HashSet;

use crate::core::error::Result;
use crate::core::types::{DocumentRecord, DocumentStatus, StatusCounts, WordTotals};

/// Persistence operations the pipeline needs
///
/// Implementations must tolerate concurrent calls for distinct
/// filenames. Connection handling and retries are the implementation's
/// concern; callers never reconnect.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Look up a record by its unique filename
    async fn find_by_filename(&self, filename: &str) -> Result<Option<DocumentRecord>>;

    /// Insert or replace the record keyed by `record.filename`
    async fn save(&self, record: &DocumentRecord) -> Result<()>;

    /// All records with the given status
    async fn find_by_status(&self, status: DocumentStatus) -> Result<Vec<DocumentRecord>>;

    /// Number of records per status
    async fn count_by_status(&self) -> Result<StatusCounts>;

    /// Word totals across every record
    async fn aggregate_word_totals(&self) -> Result<WordTotals>;

    /// Every stored record, in no particular order
    async fn find_all(&self) -> Result<Vec<DocumentRecord>>;
}

/// Count records per status
pub fn count_statuses<'a>(records: impl IntoIterator<Item = &'a DocumentRecord>) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for record in records {
        counts.increment(record.status);
    }
    counts
}

/// Sum word counts and collect distinct words
pub fn sum_word_totals<'a>(records: impl IntoIterator<Item = &'a DocumentRecord>) -> WordTotals {
    let mut total_words = 0u64;
    let mut unique = HashSet::new();

    for record in records {
        for entry in &record.words {
            total_words += entry.count as u64;
            unique.insert(entry.word.as_str());
        }
    }

    WordTotals {
        total_words,
        unique_words: unique.len(),
    }
}
