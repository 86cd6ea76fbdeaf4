//! Tests for CLI output formatting helpers
//!
//! - Byte formatting (KB, MB, GB)
//! - Duration formatting (ms, s, m)
//! - Relative time formatting
//! - Text truncation
//! - Report printing

use chrono::{Duration, Utc};
use pdfread::cli::output::{
    format_bytes, format_duration, format_relative_time, print_report, render_report,
    truncate,
};
use pdfread::core::report::ProcessingReport;

#[test]
fn test_format_bytes_boundaries() {
    assert_eq!(format_bytes(0), "0 B");
    assert_eq!(format_bytes(1023), "1023 B");
    assert_eq!(format_bytes(1024), "1.0 KB");
    assert_eq!(format_bytes(1572864), "1.5 MB");
    assert_eq!(format_bytes(1610612736), "1.5 GB");
}

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.25), "250ms");
    assert_eq!(format_duration(2.0), "2.00s");
    assert_eq!(format_duration(120.0), "2m 0.0s");
}

#[test]
fn test_format_relative_time() {
    let now = Utc::now();
    assert_eq!(format_relative_time(&(now - Duration::minutes(5))), "5m ago");
    assert_eq!(format_relative_time(&(now - Duration::days(2))), "2d ago");
    assert_eq!(
        format_relative_time(&(now + Duration::hours(1))),
        "in the future"
    );
}

#[test]
fn test_truncate_long_text() {
    let text = "a".repeat(200);
    let short = truncate(&text, 20);
    assert_eq!(short.chars().count(), 20);
    assert!(short.ends_with("..."));
}

#[test]
fn test_print_report_with_errors() {
    let mut report = ProcessingReport::new(2);
    report.record_success();
    report.record_failure("bad.pdf", "Failed to parse PDF: broken");

    // Printing must not panic for a report with errors
    print_report(&report);
    assert!(report.is_balanced());
}

#[test]
fn test_render_report_matches_log_layout() {
    let mut report = ProcessingReport::new(3);
    report.record_success();
    report.record_skip();
    report.record_failure("bad.pdf", "Failed to parse PDF: broken");

    let rendered = render_report(&report);
    let plain = report.to_string();

    assert_eq!(rendered.lines().count(), plain.lines().count());
    for line in plain.lines().filter(|l| l.starts_with(' ') || l.contains(':')) {
        if line == "FILES WITH ERRORS:" {
            continue;
        }
        assert!(rendered.contains(line), "missing line: {line}");
    }
    assert!(rendered.contains("1. bad.pdf"));
    assert!(rendered.contains("   Error: Failed to parse PDF: broken"));
    assert!(rendered.contains("Skipped:     1"));
}
