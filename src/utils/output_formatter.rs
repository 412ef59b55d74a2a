/// Output formatter for check results
///
/// This module renders findings and fixes as colored console lines and
/// exports a full run as a JSON report.

use std::fs::File;
use std::path::Path;
use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::json;

use crate::core::checker::{Finding, ScanSummary};

/// Format a single finding for console output
///
/// `<file>:<line>:<column>: <token> is not in camelCase`
pub fn format_finding(finding: &Finding) -> String {
    format!(
        "{}{}{} {}",
        format!("{}:", finding.file.display()).red(),
        format!("{}:", finding.line).green(),
        format!("{}:", finding.column).green(),
        format!("{} is not in camelCase", finding.token).red()
    )
}

/// Format the message printed after a token has been rewritten
pub fn format_fix(original: &str, replacement: &str) -> String {
    format!(
        "{} {} {}",
        "Fixed:".green(),
        original.red(),
        format!("-> {}", replacement).green()
    )
}

/// Format the usage line shown when the directory argument is missing
pub fn format_usage(program_name: &str) -> String {
    format!("Usage: {} <directory> [--fix]", program_name)
        .red()
        .to_string()
}

/// Export every finding of a run to a JSON file
///
/// # Arguments
///
/// * `findings` - All findings in report order
/// * `summary` - Totals for the run
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_findings_json(
    findings: &[Finding],
    summary: &ScanSummary,
    output_path: &Path,
) -> Result<()> {
    let report = json!({
        "summary": summary,
        "findings": findings,
    });

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, &report).context("Failed to write JSON data")?;

    Ok(())
}
