/// snake_check - find snake_case identifiers and rewrite them to camelCase
///
/// The main entry point for the checker. It parses command-line arguments,
/// sets up logging and runs the scan over the given directory.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use log::{info, LevelFilter};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process;

use snake_check::utils::file_utils::DEFAULT_EXTENSION;
use snake_check::utils::output_formatter;
use snake_check::{CaseChecker, CheckerConfig};

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "snake_check",
    version,
    about = "Finds snake_case identifiers in source files and rewrites them to camelCase",
    long_about = "Scans every matching source file under a directory and reports each
snake_case identifier with its file, line and column. With --fix the
identifiers are rewritten to camelCase in place."
)]
struct Args {
    /// Root directory of the recursive scan
    directory: PathBuf,

    /// Rewrite matched identifiers in place instead of only reporting them
    #[arg(long = "fix", action = ArgAction::SetTrue)]
    fix: bool,

    /// File name suffix selecting which files are scanned
    #[arg(long = "ext", default_value = DEFAULT_EXTENSION)]
    ext: String,

    /// Also write every finding to a JSON report
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Set logging level (default: WARN)
    #[arg(long = "log-level", default_value = "warn")]
    log_level: LevelFilter,

    /// Write log records to this file instead of stderr
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

/// Main entry point function
fn main() -> Result<()> {
    let args = parse_args();

    setup_logging(&args)?;

    let config = CheckerConfig {
        fix: args.fix,
        extension: args.ext.clone(),
    };

    let stdout = io::stdout();
    let mut checker = CaseChecker::new(config, stdout.lock());
    if args.json.is_some() {
        checker = checker.with_recording();
    }

    let summary = checker.check_directory(&args.directory)?;

    if let Some(json_path) = &args.json {
        output_formatter::export_findings_json(checker.recorded_findings(), &summary, json_path)?;
        info!("Wrote JSON report to {}", json_path.display());
    }

    Ok(())
}

/// Parse arguments, turning a missing directory into the usage message
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.kind() == ErrorKind::MissingRequiredArgument => {
            let program_name = std::env::args()
                .next()
                .unwrap_or_else(|| "snake_check".to_string());
            eprintln!("{}", output_formatter::format_usage(&program_name));
            process::exit(1);
        }
        Err(e) => e.exit(),
    }
}

/// Set up logging to stderr, or to a file when one is given
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Some(log_file) = &args.log_file {
        let file = File::create(log_file)
            .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();

    Ok(())
}
