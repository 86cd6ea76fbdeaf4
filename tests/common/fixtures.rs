// Test fixtures for integration testing

use pdfread::core::indexer::pdf::{ParseOptions, ParseResult, ParsedPdf};
use pdfread::core::indexer::PdfParser;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Parser that treats file bytes as UTF-8 text
///
/// Files whose contents start with `CORRUPT` fail on every strategy,
/// which is how the fixtures simulate a malformed PDF.
#[derive(Default)]
pub struct StubParser {
    calls: AtomicUsize,
}

#[allow(dead_code)] // Used in integration tests
impl StubParser {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PdfParser for StubParser {
    fn parse(&self, bytes: &[u8], _options: &ParseOptions) -> ParseResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = std::str::from_utf8(bytes)?;
        if text.starts_with("CORRUPT") {
            return Err("invalid cross-reference table".into());
        }
        Ok(ParsedPdf {
            text: text.to_string(),
            page_count: 1,
        })
    }
}

/// Source directory with synthetic documents
#[allow(dead_code)] // Used in integration tests
pub struct TestCorpus {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

#[allow(dead_code)] // Used in integration tests
impl TestCorpus {
    /// Empty source directory
    pub fn empty() -> Self {
        Self::with_files(&[])
    }

    /// Create a corpus with the given (filename, contents) pairs
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut corpus = Self {
            dir,
            files: Vec::new(),
        };
        for (name, contents) in files {
            corpus.add(name, contents);
        }
        corpus
    }

    /// `count` valid documents named doc_000.pdf, doc_001.pdf, ...
    pub fn numbered(count: usize) -> Self {
        let mut corpus = Self::empty();
        for i in 0..count {
            corpus.add(
                &format!("doc_{i:03}.pdf"),
                &format!("document number {i} shared vocabulary"),
            );
        }
        corpus
    }

    /// Write one more file into the corpus
    pub fn add(&mut self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        self.files.push(path.clone());
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
