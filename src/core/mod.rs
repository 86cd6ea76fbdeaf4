//! Core domain logic (adapter-agnostic)
//!
//! This module contains all business logic that is independent
//! of the command-line adapter.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Document records and aggregate views
//! - **report**: Per-run processing report
//! - **xdg**: XDG directory handling
//! - **storage**: Document repository implementations
//! - **search**: Keyword search and listings
//! - **indexer**: File enumeration, extraction and batch runs
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod indexer;
pub mod report;
pub mod search;
pub mod services;
pub mod storage;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PdfReadError, Result};
pub use report::ProcessingReport;
pub use services::Services;
