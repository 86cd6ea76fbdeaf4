//! Source directory enumeration.
//!
//! Lists the candidate documents in the configured source directory:
//! regular files directly inside it whose extension matches the
//! configured one, case-insensitively. Dotfiles count like any other
//! file; subdirectories are ignored. Unreadable entries are logged and
//! skipped.

use std::path::Path;
use walkdir::WalkDir;

use crate::core::error::{PdfReadError, Result};

/// Lists candidate files in a source directory
pub struct FileWalker {
    /// Lowercased extension without the leading dot
    extension: String,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `extension` - Extension to match, with or without leading dot
    pub fn new(extension: &str) -> Self {
        Self {
            extension: extension.trim_start_matches('.').to_lowercase(),
        }
    }

    /// Collect matching filenames from a directory
    ///
    /// # Returns
    ///
    /// Filenames (not paths) sorted lexicographically, so that batch
    /// composition is stable between runs.
    pub fn collect_files(&self, root: &Path) -> Result<Vec<String>> {
        if !root.is_dir() {
            return Err(PdfReadError::SourceDirNotFound(
                root.display().to_string(),
            ));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    if !self.matches_extension(entry.path()) {
                        tracing::debug!("Skipping non-matching file: {:?}", entry.path());
                        continue;
                    }

                    match entry.file_name().to_str() {
                        Some(name) => files.push(name.to_string()),
                        None => {
                            tracing::warn!("Skipping non-UTF-8 filename: {:?}", entry.path());
                        }
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Check if a path carries the configured extension
    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case(&self.extension))
            .unwrap_or(false)
    }
}
