//! In-memory document repository.
//!
//! Keeps records in a map guarded by an async lock. Nothing survives
//! the process; used for tests and dry runs.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::core::error::Result;
use crate::core::storage::repository::{count_statuses, sum_word_totals, DocumentRepository};
use crate::core::types::{DocumentRecord, DocumentStatus, StatusCounts, WordTotals};

/// Repository backed by a `HashMap`
#[derive(Default)]
pub struct InMemoryRepository {
    records: RwLock<HashMap<String, DocumentRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryRepository {
    async fn find_by_filename(&self, filename: &str) -> Result<Option<DocumentRecord>> {
        Ok(self.records.read().await.get(filename).cloned())
    }

    async fn save(&self, record: &DocumentRecord) -> Result<()> {
        self.records
            .write()
            .await
            .insert(record.filename.clone(), record.clone());
        Ok(())
    }

    async fn find_by_status(&self, status: DocumentStatus) -> Result<Vec<DocumentRecord>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.status == status)
            .cloned()
            .collect())
    }

    async fn count_by_status(&self) -> Result<StatusCounts> {
        Ok(count_statuses(self.records.read().await.values()))
    }

    async fn aggregate_word_totals(&self) -> Result<WordTotals> {
        Ok(sum_word_totals(self.records.read().await.values()))
    }

    async fn find_all(&self) -> Result<Vec<DocumentRecord>> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
