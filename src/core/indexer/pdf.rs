//! PDF text extraction.
//!
//! Wraps a third-party parser behind the [`PdfParser`] trait and runs
//! it through an ordered list of [`ParseOptions`]. The first strategy
//! that succeeds wins; when all of them fail the error carries the
//! message of the first attempt. Adding a fallback means adding an
//! entry to the list.
//!
//! Parsing is CPU-bound and runs on the blocking thread pool. A panic
//! inside the parser counts as a failed attempt.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::core::error::{PdfReadError, Result};

/// Error type returned by parser implementations
pub type ParserError = Box<dyn std::error::Error + Send + Sync>;

/// Outcome of a single parser call
pub type ParseResult = std::result::Result<ParsedPdf, ParserError>;

/// Parser configuration for one extraction attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collapse whitespace runs and drop blank lines
    pub normalize_whitespace: bool,

    /// Let the parser merge adjacent text fragments into lines
    pub combine_text_items: bool,
}

impl ParseOptions {
    /// Primary strategy
    pub const NORMALIZED: ParseOptions = ParseOptions {
        normalize_whitespace: true,
        combine_text_items: true,
    };

    /// Fallback for documents the primary strategy rejects
    pub const RAW_FRAGMENTS: ParseOptions = ParseOptions {
        normalize_whitespace: false,
        combine_text_items: false,
    };
}

/// Default strategy order
pub fn default_strategies() -> Vec<ParseOptions> {
    vec![ParseOptions::NORMALIZED, ParseOptions::RAW_FRAGMENTS]
}

/// Raw parser output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPdf {
    pub text: String,
    pub page_count: usize,
}

/// A PDF parsing backend
pub trait PdfParser: Send + Sync {
    fn parse(&self, bytes: &[u8], options: &ParseOptions) -> ParseResult;
}

/// Parser backed by `pdf-extract` (combined text) and `lopdf`
/// (per-page fragments)
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultPdfParser;

impl PdfParser for DefaultPdfParser {
    fn parse(&self, bytes: &[u8], options: &ParseOptions) -> ParseResult {
        let (text, page_count) = if options.combine_text_items {
            let text = pdf_extract::extract_text_from_mem(bytes).map_err(|e| e.to_string())?;
            // pdf-extract does not expose a page count
            let page_count = lopdf::Document::load_mem(bytes)
                .map(|document| document.get_pages().len())
                .unwrap_or(0);
            (text, page_count)
        } else {
            let document = lopdf::Document::load_mem(bytes).map_err(|e| e.to_string())?;
            if document.is_encrypted() {
                return Err("document is encrypted".into());
            }
            let mut pages = Vec::new();
            for page_number in document.get_pages().keys() {
                let text = document
                    .extract_text(&[*page_number])
                    .map_err(|e| e.to_string())?;
                pages.push(text);
            }
            (pages.join("\n"), pages.len())
        };

        let text = if options.normalize_whitespace {
            normalize_whitespace(&text)
        } else {
            text
        };

        Ok(ParsedPdf { text, page_count })
    }
}

/// Collapse whitespace runs inside each line and drop blank lines
pub fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Text and page count of a successfully extracted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

/// Runs a parser through the configured strategies
#[derive(Clone)]
pub struct PdfTextExtractor {
    parser: Arc<dyn PdfParser>,
    strategies: Arc<[ParseOptions]>,
}

impl PdfTextExtractor {
    /// Create an extractor with the default strategy order
    pub fn new(parser: Arc<dyn PdfParser>) -> Self {
        Self::with_strategies(parser, default_strategies())
    }

    pub fn with_strategies(parser: Arc<dyn PdfParser>, strategies: Vec<ParseOptions>) -> Self {
        Self {
            parser,
            strategies: strategies.into(),
        }
    }

    /// Extract text from document bytes
    ///
    /// # Errors
    ///
    /// * `EmptyFile` - zero-length input
    /// * `Parse` - every strategy failed (message of the first attempt)
    /// * `EmptyText` - parsing succeeded but produced only whitespace
    pub async fn extract(&self, filename: &str, bytes: Vec<u8>) -> Result<ExtractedText> {
        if bytes.is_empty() {
            return Err(PdfReadError::EmptyFile(filename.to_string()));
        }

        let parser = Arc::clone(&self.parser);
        let strategies = Arc::clone(&self.strategies);
        let parsed = tokio::task::spawn_blocking(move || {
            run_strategies(parser.as_ref(), &strategies, &bytes)
        })
        .await
        .map_err(|e| PdfReadError::Parse(format!("parser task failed: {e}")))??;

        if parsed.text.trim().is_empty() {
            return Err(PdfReadError::EmptyText(filename.to_string()));
        }

        Ok(ExtractedText {
            text: parsed.text,
            page_count: parsed.page_count,
        })
    }
}

/// Try each strategy in order until one succeeds
fn run_strategies(
    parser: &dyn PdfParser,
    strategies: &[ParseOptions],
    bytes: &[u8],
) -> Result<ParsedPdf> {
    let mut first_error: Option<String> = None;

    for (attempt, options) in strategies.iter().enumerate() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| parser.parse(bytes, options)))
            .unwrap_or_else(|_| Err("parser panicked".into()));

        match outcome {
            Ok(parsed) => {
                if attempt > 0 {
                    tracing::debug!("Parse succeeded with fallback strategy {:?}", options);
                }
                return Ok(parsed);
            }
            Err(e) => {
                tracing::warn!(
                    "Parse attempt {}/{} failed ({:?}): {}",
                    attempt + 1,
                    strategies.len(),
                    options,
                    e
                );
                first_error.get_or_insert_with(|| e.to_string());
            }
        }
    }

    Err(PdfReadError::Parse(first_error.unwrap_or_else(|| {
        "no parse strategies configured".to_string()
    })))
}
