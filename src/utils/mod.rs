/// Utility modules for the checker
///
/// This module contains the directory walk, line-preserving file IO and
/// console/JSON output formatting.

pub mod file_utils;
pub mod output_formatter;
