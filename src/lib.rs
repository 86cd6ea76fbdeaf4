//! pdfread - Batch PDF Ingestion and Keyword Search
//!
//! Ingests a directory of PDF files, extracts their text and a
//! per-document word-frequency table, and stores one record per file
//! with its processing status. Stored records can then be searched by
//! keyword.
//!
//! # Architecture
//!
//! The codebase is organized into two main modules:
//!
//! - **core**: Domain logic (adapter-agnostic)
//!   - config, error, types, report, xdg
//!   - storage (document repositories)
//!   - search (keyword queries, listings)
//!   - indexer (enumeration, extraction, batch runs)
//!   - services (unified service container)
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output formatting
//!
//! # Key Features
//!
//! - Idempotent runs: completed documents are skipped by status
//! - Crash tolerant: records left `processing` are picked up again
//! - Bounded concurrency with pacing between batches
//! - Ordered fallback parse strategies
//! - Every failure is recorded on its document and in the run report

// Core domain logic (adapter-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{PdfReadError, Result};
pub use core::report::{ProcessingReport, ReportEntry};
pub use core::services::Services;
pub use core::types::*;
