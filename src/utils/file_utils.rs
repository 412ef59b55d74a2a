/// File handling utilities
///
/// This module provides the directory walk that selects source files and the
/// line-preserving read/write helpers used when checking and fixing them.

use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use log::error;
use walkdir::WalkDir;

/// Extension marker used when none is given
pub const DEFAULT_EXTENSION: &str = ".scala";

/// Errors raised while preparing a scan
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Walk `root` recursively and yield every regular file whose name ends
/// with `extension`.
///
/// The walk is lazy and yields entries in filesystem order. Symlinks are not
/// followed. Traversal errors are yielded as `Err` so the caller can abort.
/// A missing root is logged and yields nothing.
///
/// # Arguments
///
/// * `root` - Directory to scan
/// * `extension` - File name suffix that selects files (e.g. `.scala`)
///
/// # Returns
///
/// Iterator over matching file paths
pub fn find_source_files(
    root: &Path,
    extension: &str,
) -> Result<impl Iterator<Item = Result<PathBuf>>> {
    let exists = root.exists();
    if exists && !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()).into());
    }
    if !exists {
        error!("Directory not found: {}", root.display());
    }

    let extension = extension.to_string();
    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .take_while(move |_| exists);

    Ok(walker.filter_map(move |entry| match entry {
        Ok(entry) => {
            let selected = entry.file_type().is_file()
                && entry.file_name().to_string_lossy().ends_with(extension.as_str());
            selected.then(|| Ok(entry.into_path()))
        }
        Err(e) => {
            let context = match e.path() {
                Some(path) => format!("Failed to walk {}", path.display()),
                None => "Failed to walk directory".to_string(),
            };
            Some(Err(anyhow::Error::new(e).context(context)))
        }
    }))
}

/// Read a file as UTF-8 and split it into lines.
///
/// Every line keeps its terminator, so concatenating the result reproduces
/// the file byte for byte.
pub fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    Ok(content.split_inclusive('\n').map(str::to_string).collect())
}

/// Replace the contents of a file with the given lines
pub fn write_lines(file_path: &Path, lines: &[String]) -> Result<()> {
    fs::write(file_path, lines.concat())
        .with_context(|| format!("Failed to write {}", file_path.display()))
}
