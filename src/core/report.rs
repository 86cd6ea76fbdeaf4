//! Processing report for a single batch run.
//!
//! A report is built fresh by every run and returned by value; it is
//! never shared mutable state between runs.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A failed document in a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub filename: String,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// Aggregate outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub skipped: usize,
    pub errors: Vec<ReportEntry>,
}

impl ProcessingReport {
    /// Create an empty report for `total` candidate files
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn record_success(&mut self) {
        self.successful += 1;
    }

    pub fn record_skip(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failure(&mut self, filename: impl Into<String>, error: impl Into<String>) {
        self.failed += 1;
        self.errors.push(ReportEntry {
            filename: filename.into(),
            error: error.into(),
            timestamp: Utc::now(),
        });
    }

    /// Number of outcomes recorded so far
    pub fn processed(&self) -> usize {
        self.successful + self.failed + self.skipped
    }

    /// True once every candidate has an outcome
    pub fn is_balanced(&self) -> bool {
        self.processed() == self.total
    }

    /// Success percentage, `None` for an empty run
    pub fn success_rate(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.successful as f64 / self.total as f64 * 100.0)
        }
    }

    /// Log the rendered summary line by line
    pub fn log_summary(&self) {
        for line in self.to_string().lines() {
            tracing::info!("{}", line);
        }
    }
}

impl fmt::Display for ProcessingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PROCESSING REPORT")?;
        writeln!(f, "{}", "=".repeat(50))?;
        writeln!(f, "Total files: {}", self.total)?;
        writeln!(f, "Successful:  {}", self.successful)?;
        writeln!(f, "Failed:      {}", self.failed)?;
        writeln!(f, "Skipped:     {}", self.skipped)?;
        if let Some(rate) = self.success_rate() {
            writeln!(f, "Success rate: {rate:.1}%")?;
        }

        if !self.errors.is_empty() {
            writeln!(f)?;
            writeln!(f, "FILES WITH ERRORS:")?;
            writeln!(f, "{}", "-".repeat(30))?;
            for (idx, entry) in self.errors.iter().enumerate() {
                writeln!(f, "{}. {}", idx + 1, entry.filename)?;
                writeln!(f, "   Error: {}", entry.error)?;
                writeln!(
                    f,
                    "   Date: {}",
                    entry
                        .timestamp
                        .with_timezone(&Local)
                        .format("%Y-%m-%d %H:%M:%S")
                )?;
            }
        }

        write!(f, "{}", "=".repeat(50))
    }
}
