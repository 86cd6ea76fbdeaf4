//! Search module for keyword queries over document records.
//!
//! Matching is a case-insensitive regular expression applied to each
//! record's word list, extracted content and filename.

mod query;
mod service;

pub use query::build_matcher;
pub use service::SearchService;
