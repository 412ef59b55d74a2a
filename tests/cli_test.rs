/// Command-line tests for the snake_check binary
///
/// These tests run the compiled binary against temporary source trees and
/// check exit codes, console output and the files left on disk.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_snake_check"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute binary")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path is UTF-8")
}

#[test]
fn test_missing_directory_prints_usage() {
    let output = run_cli(&[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: "), "Unexpected stderr: {}", stderr);
    assert!(stderr.contains("<directory> [--fix]"), "Unexpected stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_only_fix_flag_is_still_a_usage_error() {
    let output = run_cli(&["--fix"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: "));
}

#[test]
fn test_empty_directory_is_silent() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let output = run_cli(&[path_arg(temp_dir.path())]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_dry_run_reports_and_exits_zero() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file = temp_dir.path().join("Main.scala");
    fs::write(&file, "val my_value = snake_case_name\n").unwrap();

    let output = run_cli(&[path_arg(temp_dir.path())]);

    assert!(output.status.success(), "Binary failed: {:?}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(":1:5: my_value is not in camelCase"), "Unexpected output: {}", stdout);
    assert!(stdout.contains(":1:16: snake_case_name is not in camelCase"), "Unexpected output: {}", stdout);
    assert!(!stdout.contains("Fixed:"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "val my_value = snake_case_name\n");
}

#[test]
fn test_fix_flag_after_directory() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file = temp_dir.path().join("Main.scala");
    fs::write(&file, "val my_value = snake_case_name\n").unwrap();

    let output = run_cli(&[path_arg(temp_dir.path()), "--fix"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Fixed: ").count(), 2, "Unexpected output: {}", stdout);
    assert!(stdout.contains("Fixed: my_value -> myValue"));
    assert!(stdout.contains("Fixed: snake_case_name -> snakeCaseName"));
    assert_eq!(fs::read_to_string(&file).unwrap(), "val myValue = snakeCaseName\n");

    let second = run_cli(&[path_arg(temp_dir.path()), "--fix"]);
    assert!(second.status.success());
    assert!(second.stdout.is_empty());
}

#[test]
fn test_fix_flag_before_directory() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file = temp_dir.path().join("Main.scala");
    fs::write(&file, "def run_all() = ()\n").unwrap();

    let output = run_cli(&["--fix", path_arg(temp_dir.path())]);

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&file).unwrap(), "def runAll() = ()\n");
}

#[test]
fn test_ext_option() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("Main.kt"), "val max_size = 1\n").unwrap();
    fs::write(temp_dir.path().join("Main.scala"), "val max_size = 1\n").unwrap();

    let output = run_cli(&[path_arg(temp_dir.path()), "--ext", ".kt"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "Unexpected output: {}", stdout);
    assert!(stdout.contains("Main.kt:1:5: max_size"));
}

#[test]
fn test_json_report() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let src = temp_dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("A.scala"), "val a_b = 1\nval c_d = 2\n").unwrap();
    let report_path = temp_dir.path().join("report.json");

    let output = run_cli(&[path_arg(&src), "--json", path_arg(&report_path)]);
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(report["summary"]["files_scanned"], 1);
    assert_eq!(report["summary"]["findings"], 2);
    assert_eq!(report["findings"][1]["token"], "c_d");
    assert_eq!(report["findings"][1]["line"], 2);
}

#[test]
fn test_invalid_utf8_aborts_with_error() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("Bad.scala"), [0x76, 0x61, 0xff, 0x0a]).unwrap();

    let output = run_cli(&[path_arg(temp_dir.path())]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Bad.scala"));
}
