//! CLI command implementations
//!
//! Each module owns the arguments and output of one command group.

pub mod completions;
pub mod config;
pub mod documents;
pub mod process;
pub mod search;
pub mod stats;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use search::SearchArgs;
pub use stats::StatsArgs;
