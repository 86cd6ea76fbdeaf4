//! Document ingestion module.
//!
//! Turns source files into stored document records:
//!
//! - **walker**: enumerates candidate files in the source directory
//! - **pdf**: text extraction with ordered fallback strategies
//! - **words**: word-frequency extraction
//! - **processor**: the per-document record lifecycle
//! - **pipeline**: batched, bounded-concurrency runs over a corpus

pub mod pdf;
pub mod pipeline;
pub mod processor;
pub mod walker;
pub mod words;

pub use pdf::{DefaultPdfParser, PdfParser, PdfTextExtractor};
pub use pipeline::{scaled_concurrency, BatchProcessor};
pub use processor::{DocumentProcessor, ProcessOutcome};
pub use walker::FileWalker;
pub use words::extract_words;
