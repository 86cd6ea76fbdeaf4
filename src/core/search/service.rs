//! Keyword search and document listings.
//!
//! This module provides the SearchService for querying stored
//! document records.

use regex::Regex;
use std::cmp::Reverse;
use std::sync::Arc;
use std::time::Instant;

use crate::core::config::SearchConfig;
use crate::core::error::{PdfReadError, Result};
use crate::core::search::query::build_matcher;
use crate::core::storage::DocumentRepository;
use crate::core::types::{
    DocumentPage, DocumentRecord, DocumentStatus, Pagination, SearchResponse,
};

/// Search and listing service over the document repository
pub struct SearchService {
    repository: Arc<dyn DocumentRepository>,
    default_limit: usize,
    max_limit: usize,
    max_query_length: usize,
}

impl SearchService {
    /// Create a new search service
    pub fn new(repository: Arc<dyn DocumentRepository>, config: &SearchConfig) -> Self {
        Self {
            repository,
            default_limit: config.default_limit,
            max_limit: config.max_limit,
            max_query_length: config.max_query_length,
        }
    }

    /// Find records whose words, content or filename match `keyword`
    ///
    /// Results are ordered by processing time, newest first; records
    /// that were never completed come last.
    pub async fn search_by_keyword(
        &self,
        keyword: &str,
        limit: Option<usize>,
        literal: bool,
    ) -> Result<SearchResponse> {
        let start = Instant::now();
        let matcher = build_matcher(keyword, literal, self.max_query_length)?;
        let limit = self.effective_limit(limit);

        let mut documents: Vec<DocumentRecord> = self
            .repository
            .find_all()
            .await?
            .into_iter()
            .filter(|record| matches_record(&matcher, record))
            .collect();

        documents.sort_by(|a, b| {
            b.processed_at()
                .cmp(&a.processed_at())
                .then_with(|| a.filename.cmp(&b.filename))
        });

        let total = documents.len();
        documents.truncate(limit);

        Ok(SearchResponse {
            query: keyword.trim().to_string(),
            documents,
            total,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// Page through records, newest first
    ///
    /// # Arguments
    ///
    /// * `status` - Only records in this status, if given
    /// * `page` - 1-based page number
    /// * `limit` - Page size (default and cap from config)
    pub async fn list_documents(
        &self,
        status: Option<DocumentStatus>,
        page: usize,
        limit: Option<usize>,
    ) -> Result<DocumentPage> {
        if page == 0 {
            return Err(PdfReadError::InvalidQuery(
                "Page numbers start at 1".to_string(),
            ));
        }
        let limit = self.effective_limit(limit);

        let mut records = match status {
            Some(status) => self.repository.find_by_status(status).await?,
            None => self.repository.find_all().await?,
        };
        sort_newest_first(&mut records);

        let total = records.len();
        let documents = records
            .into_iter()
            .skip((page - 1).saturating_mul(limit))
            .take(limit)
            .collect();

        Ok(DocumentPage {
            documents,
            pagination: Pagination::new(page, limit, total),
        })
    }

    /// Records currently in `error` state, newest first
    pub async fn documents_with_errors(&self) -> Result<Vec<DocumentRecord>> {
        let mut records = self.repository.find_by_status(DocumentStatus::Error).await?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    /// Look up one record
    pub async fn get_document(&self, filename: &str) -> Result<DocumentRecord> {
        self.repository
            .find_by_filename(filename)
            .await?
            .ok_or_else(|| PdfReadError::DocumentNotFound(filename.to_string()))
    }

    fn effective_limit(&self, limit: Option<usize>) -> usize {
        limit.unwrap_or(self.default_limit).clamp(1, self.max_limit.max(1))
    }
}

fn matches_record(matcher: &Regex, record: &DocumentRecord) -> bool {
    record.words.iter().any(|entry| matcher.is_match(&entry.word))
        || record
            .content
            .as_deref()
            .map(|content| matcher.is_match(content))
            .unwrap_or(false)
        || matcher.is_match(&record.filename)
}

fn sort_newest_first(records: &mut [DocumentRecord]) {
    records.sort_by_key(|r| (Reverse(r.created_at), r.filename.clone()));
}
