//! Keyword pattern construction.
//!
//! A keyword is treated as a case-insensitive regular expression, so
//! `inv(oice|oices)` and `^report` work as expected. Keywords that do
//! not compile as a regex are matched literally instead of failing:
//! `c++` or `(draft` simply search for those characters.
//!
//! Literal mode skips regex interpretation entirely.

use regex::{Regex, RegexBuilder};

use crate::core::error::{PdfReadError, Result};

// Upper bound on compiled program size for user-supplied patterns
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Compile a keyword into a case-insensitive matcher
///
/// # Examples
///
/// ```
/// use pdfread::core::search::build_matcher;
///
/// let re = build_matcher("hel+o", false, 500).unwrap();
/// assert!(re.is_match("HELLO"));
///
/// // Invalid regex falls back to a literal match
/// let re = build_matcher("c++", false, 500).unwrap();
/// assert!(re.is_match("learning C++ today"));
///
/// // Literal mode escapes everything
/// let re = build_matcher("a.c", true, 500).unwrap();
/// assert!(!re.is_match("abc"));
/// ```
pub fn build_matcher(keyword: &str, literal: bool, max_length: usize) -> Result<Regex> {
    let trimmed = keyword.trim();

    if trimmed.is_empty() {
        return Err(PdfReadError::InvalidQuery(
            "Keyword cannot be empty".to_string(),
        ));
    }

    if trimmed.chars().count() > max_length {
        return Err(PdfReadError::InvalidQuery(format!(
            "Keyword exceeds {max_length} characters"
        )));
    }

    if !literal {
        match compile(trimmed) {
            Ok(re) => return Ok(re),
            Err(e) => {
                tracing::debug!(
                    "Keyword '{}' is not a valid regex ({}), matching literally",
                    trimmed,
                    e
                );
            }
        }
    }

    compile(&regex::escape(trimmed))
        .map_err(|e| PdfReadError::InvalidQuery(format!("Unusable keyword: {e}")))
}

fn compile(pattern: &str) -> std::result::Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}
