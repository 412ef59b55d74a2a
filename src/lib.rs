/// snake_check - find snake_case identifiers and rewrite them to camelCase
///
/// This library scans source files line by line, reports every snake_case
/// token it finds and can rewrite those tokens in place.

pub mod core;
pub mod utils;

// Re-export the main checker types for convenience
pub use crate::core::checker::{CaseChecker, CheckerConfig, Finding, ScanSummary};
pub use crate::core::patterns::to_camel_case;
pub use crate::utils::file_utils::ScanError;

/// Check a directory and print findings to stdout
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `root` - Directory to scan recursively
/// * `config` - Fix mode and extension marker
///
/// # Returns
///
/// Totals for the run
pub fn check_directory<P: AsRef<std::path::Path>>(
    root: P,
    config: CheckerConfig,
) -> anyhow::Result<ScanSummary> {
    let stdout = std::io::stdout();
    let mut checker = CaseChecker::new(config, stdout.lock());
    checker.check_directory(root.as_ref())
}
