//! Path resolution utilities for the CLI.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

/// Read file paths from stdin, one per line.
/// Empty lines and lines starting with # are ignored.
pub fn read_paths_from_stdin() -> Result<Vec<PathBuf>> {
    let stdin = io::stdin();
    let mut paths = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() && !trimmed.starts_with('#') {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

/// Collect source paths from args or stdin, made absolute against `cwd`.
pub fn collect_paths(args: Vec<PathBuf>, stdin: bool, cwd: &Path) -> Result<Vec<PathBuf>> {
    let paths = if stdin { read_paths_from_stdin()? } else { args };
    if paths.is_empty() {
        bail!("No source paths given");
    }
    Ok(paths.iter().map(|p| absolutize(p, cwd)).collect())
}

/// Join a relative path onto `cwd`; absolute paths are returned unchanged.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
