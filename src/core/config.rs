//! Configuration management for pdfread.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{PdfReadError, Result};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ingest: IngestConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Ingestion configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestConfig {
    /// Directory scanned for source documents
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Documents processed concurrently per batch
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Pause between batches in milliseconds
    #[serde(default = "default_batch_delay_ms")]
    pub batch_delay_ms: u64,

    /// File extension to ingest (matched case-insensitively)
    #[serde(default = "default_extension")]
    pub extension: String,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root directory for document records
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Attempts per repository operation before giving up
    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    /// Delay between repository retries in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum keyword length
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

// Default value functions
fn default_source_dir() -> PathBuf {
    PathBuf::from("./downloads")
}

fn default_concurrency() -> usize {
    5
}

fn default_batch_delay_ms() -> u64 {
    1000
}

fn default_extension() -> String {
    "pdf".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    200
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            concurrency: default_concurrency(),
            batch_delay_ms: default_batch_delay_ms(),
            extension: default_extension(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PdfReadError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// This method uses XDG Base Directory specification for file locations.
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PDFREAD_CONFIG env var
    /// 2. XDG config file (~/.config/pdfread/config.toml)
    /// 3. ./pdfread.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PDFREAD_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("pdfread.toml").exists() {
                Self::from_file("pdfread.toml")?
            } else {
                Self::default()
            }
        };

        // Records live in the XDG data directory unless set explicitly
        if env::var("PDFREAD_DATA_DIR").is_err() && config.storage.data_dir == default_data_dir()
        {
            config.storage.data_dir = xdg.data_dir.clone();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Ingest configuration
        if let Ok(dir) = env::var("PDFREAD_SOURCE_DIR") {
            self.ingest.source_dir = PathBuf::from(dir);
        }
        if let Ok(concurrency) = env::var("PDFREAD_CONCURRENCY") {
            if let Ok(c) = concurrency.parse() {
                self.ingest.concurrency = c;
            }
        }
        if let Ok(delay) = env::var("PDFREAD_BATCH_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.ingest.batch_delay_ms = d;
            }
        }

        // Storage configuration
        if let Ok(data_dir) = env::var("PDFREAD_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(data_dir);
        }
        if let Ok(attempts) = env::var("PDFREAD_RETRY_ATTEMPTS") {
            if let Ok(a) = attempts.parse() {
                self.storage.retry_attempts = a;
            }
        }
        if let Ok(delay) = env::var("PDFREAD_RETRY_DELAY_MS") {
            if let Ok(d) = delay.parse() {
                self.storage.retry_delay_ms = d;
            }
        }

        // Search configuration
        if let Ok(limit) = env::var("PDFREAD_DEFAULT_LIMIT") {
            if let Ok(l) = limit.parse() {
                self.search.default_limit = l;
            }
        }
        if let Ok(max_limit) = env::var("PDFREAD_MAX_LIMIT") {
            if let Ok(l) = max_limit.parse() {
                self.search.max_limit = l;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ingest.concurrency == 0 {
            return Err(PdfReadError::ConfigError(
                "Concurrency must be at least 1".to_string(),
            ));
        }

        if self.ingest.extension.trim_start_matches('.').is_empty() {
            return Err(PdfReadError::ConfigError(
                "File extension must not be empty".to_string(),
            ));
        }

        if self.storage.retry_attempts == 0 {
            return Err(PdfReadError::ConfigError(
                "Retry attempts must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit == 0 {
            return Err(PdfReadError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(PdfReadError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(PdfReadError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Source dir: {:?}", self.ingest.source_dir);
        tracing::info!("  Extension: .{}", self.ingest.extension);
        tracing::info!("  Concurrency: {}", self.ingest.concurrency);
        tracing::info!("  Batch delay: {}ms", self.ingest.batch_delay_ms);
        tracing::info!("  Data dir: {:?}", self.storage.data_dir);
        tracing::info!(
            "  Storage retries: {} x {}ms",
            self.storage.retry_attempts,
            self.storage.retry_delay_ms
        );
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
    }
}
