//! Storage layer for document records.
//!
//! The pipeline talks to a [`DocumentRepository`]; two implementations
//! are provided:
//!
//! - **JsonFileRepository**: one JSON file per record under
//!   `{data_dir}/documents/`, with retries on I/O failure
//! - **InMemoryRepository**: process-local map, used by tests
//!
//! Records are keyed by filename. `save` is an upsert.

mod json_store;
mod memory;
mod repository;

pub use json_store::{JsonFileRepository, RetryPolicy};
pub use memory::InMemoryRepository;
pub use repository::{count_statuses, sum_word_totals, DocumentRepository};
