//! Word-frequency extraction.
//!
//! Turns extracted document text into a table of words with their
//! counts and a coarse position for the first occurrence. Tokens are
//! lowercased, stripped of everything that is not a letter or digit,
//! and tokens of two characters or fewer are dropped. There is no
//! stemming and no stop-word list.
//!
//! Output order is the order in which each word is first seen.

use std::collections::HashMap;

use crate::core::types::{WordEntry, WordPosition};

/// Tokens per synthetic "page" used for coarse positions
pub const TOKENS_PER_PAGE: usize = 100;

/// Tokens with this many characters or fewer are discarded
pub const MIN_WORD_CHARS: usize = 2;

/// Extract a word-frequency table from text
///
/// The position recorded for each word is its index in the filtered
/// token sequence at first sight; later occurrences only bump the
/// count.
pub fn extract_words(text: &str) -> Vec<WordEntry> {
    let mut entries: Vec<WordEntry> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, token) in tokenize(text).into_iter().enumerate() {
        match seen.get(&token) {
            Some(&slot) => entries[slot].count += 1,
            None => {
                seen.insert(token.clone(), entries.len());
                entries.push(WordEntry {
                    word: token,
                    count: 1,
                    positions: vec![WordPosition {
                        page: index / TOKENS_PER_PAGE + 1,
                        position: index,
                    }],
                });
            }
        }
    }

    entries
}

/// Normalize text into the filtered token sequence
fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_WORD_CHARS)
        .map(str::to_string)
        .collect()
}
