// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{StubParser, TestCorpus};
#[allow(unused_imports)]
pub use helpers::{assert_report_balanced, create_test_services, test_config};
