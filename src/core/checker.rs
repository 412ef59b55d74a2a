/// Core snake_case checker implementation
///
/// This file contains the CaseChecker which walks source files, reports every
/// snake_case token it finds and, in fix mode, rewrites them to camelCase.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use log::{debug, info};
use serde::Serialize;

use crate::core::patterns::{find_snake_case, to_camel_case};
use crate::utils::file_utils::{self, DEFAULT_EXTENSION};
use crate::utils::output_formatter::{format_finding, format_fix};

/// Options controlling a check run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    /// Rewrite tokens in place instead of only reporting them
    pub fix: bool,

    /// File name suffix selecting which files are scanned
    pub extension: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            fix: false,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

/// A snake_case token found at a specific position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: PathBuf,

    /// 1-based line number
    pub line: usize,

    /// 1-based column, counted in characters
    pub column: usize,

    pub token: String,

    /// camelCase form of `token`
    pub replacement: String,
}

/// Result of checking one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineReport {
    pub findings: Vec<Finding>,

    /// Rewritten line, present only in fix mode
    pub fixed: Option<String>,
}

/// Result of checking one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub findings: Vec<Finding>,
    pub fixes: usize,
    pub modified: bool,
}

/// Totals for a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub findings: usize,
    pub fixes: usize,
}

/// Check a single line for snake_case tokens.
///
/// Replacement is span-based: each camelCase form is spliced in at the exact
/// byte range of its match, so repeated token text elsewhere in the line is
/// never touched by mistake.
///
/// # Arguments
///
/// * `file` - Path reported in each finding
/// * `line_num` - 1-based line number
/// * `line` - Line content, terminator included
/// * `fix` - Whether to build the rewritten line
///
/// # Returns
///
/// Findings in left-to-right order, plus the rewritten line in fix mode
pub fn check_line(file: &Path, line_num: usize, line: &str, fix: bool) -> LineReport {
    let mut findings = Vec::new();
    let mut fixed = String::with_capacity(line.len());
    let mut last_end = 0;

    for m in find_snake_case(line) {
        let replacement = to_camel_case(m.as_str());

        if fix {
            fixed.push_str(&line[last_end..m.start()]);
            fixed.push_str(&replacement);
            last_end = m.end();
        }

        findings.push(Finding {
            file: file.to_path_buf(),
            line: line_num,
            column: line[..m.start()].chars().count() + 1,
            token: m.as_str().to_string(),
            replacement,
        });
    }

    let fixed = fix.then(|| {
        fixed.push_str(&line[last_end..]);
        fixed
    });

    LineReport { findings, fixed }
}

/// Reports snake_case tokens to an output stream and optionally fixes them
pub struct CaseChecker<W: Write> {
    config: CheckerConfig,

    /// Where finding and fix messages are printed
    out: W,

    /// Findings kept for later export, only when recording is on
    recorded: Option<Vec<Finding>>,
}

impl<W: Write> CaseChecker<W> {
    /// Create a new CaseChecker printing to `out`
    pub fn new(config: CheckerConfig, out: W) -> Self {
        Self {
            config,
            out,
            recorded: None,
        }
    }

    /// Keep every finding in memory so it can be exported after the run
    pub fn with_recording(mut self) -> Self {
        self.recorded = Some(Vec::new());
        self
    }

    /// Findings recorded so far (empty unless recording is on)
    pub fn recorded_findings(&self) -> &[Finding] {
        self.recorded.as_deref().unwrap_or(&[])
    }

    /// Consume the checker and hand back its output stream
    pub fn into_output(self) -> W {
        self.out
    }

    /// Check one file, printing each finding as its line is processed.
    ///
    /// In fix mode the file is rewritten once all lines are processed, and
    /// only if at least one token was replaced.
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to check
    ///
    /// # Returns
    ///
    /// Findings and fix counts for the file
    pub fn check_file(&mut self, file_path: &Path) -> Result<FileReport> {
        info!("Checking file: {}", file_path.display());

        let lines = file_utils::read_lines(file_path)?;
        let mut new_lines = Vec::with_capacity(if self.config.fix { lines.len() } else { 0 });
        let mut report = FileReport {
            findings: Vec::new(),
            fixes: 0,
            modified: false,
        };

        for (index, line) in lines.iter().enumerate() {
            let line_report = check_line(file_path, index + 1, line, self.config.fix);

            if !line_report.findings.is_empty() {
                debug!(
                    "{}:{}: {} snake_case token(s)",
                    file_path.display(),
                    index + 1,
                    line_report.findings.len()
                );
            }

            for finding in &line_report.findings {
                writeln!(self.out, "{}", format_finding(finding))?;
                if self.config.fix {
                    writeln!(self.out, "{}", format_fix(&finding.token, &finding.replacement))?;
                    report.fixes += 1;
                }
            }

            if let Some(fixed) = line_report.fixed {
                new_lines.push(fixed);
            }
            report.findings.extend(line_report.findings);
        }

        if self.config.fix && report.fixes > 0 {
            file_utils::write_lines(file_path, &new_lines)?;
            report.modified = true;
            info!("Rewrote {} ({} fix(es))", file_path.display(), report.fixes);
        }

        if let Some(recorded) = self.recorded.as_mut() {
            recorded.extend(report.findings.iter().cloned());
        }

        Ok(report)
    }

    /// Check every matching file under `root`, one file at a time.
    ///
    /// The first I/O error aborts the run.
    pub fn check_directory(&mut self, root: &Path) -> Result<ScanSummary> {
        info!("Scanning {} for *{} files", root.display(), self.config.extension);

        let mut summary = ScanSummary::default();
        for file_path in file_utils::find_source_files(root, &self.config.extension)? {
            let report = self.check_file(&file_path?)?;

            summary.files_scanned += 1;
            summary.findings += report.findings.len();
            summary.fixes += report.fixes;
            if report.modified {
                summary.files_modified += 1;
            }
        }

        self.out.flush()?;
        info!(
            "Scanned {} file(s): {} finding(s), {} fix(es)",
            summary.files_scanned, summary.findings, summary.fixes
        );

        Ok(summary)
    }
}
