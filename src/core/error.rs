//! Error types and error handling for the pdfread pipeline.
//!
//! Per-document failures (missing file, empty file, parse failure,
//! blank text, persistence) share one enum with the configuration and
//! query errors so that every layer can use the same `Result` alias.
//! The batch orchestrator downgrades per-document failures to report
//! entries; everything else propagates to the caller.

use thiserror::Error;

/// Result type alias for pdfread operations
pub type Result<T> = std::result::Result<T, PdfReadError>;

/// Main error type for pdfread
#[derive(Error, Debug)]
pub enum PdfReadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("PDF file is empty: {0}")]
    EmptyFile(String),

    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("No text could be extracted from {0} (file is possibly corrupt or protected)")]
    EmptyText(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Source directory not found: {0}")]
    SourceDirNotFound(String),

    #[error("Document not found: {0}")]
    DocumentNotFound(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PdfReadError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }
}
