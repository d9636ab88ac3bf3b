//! Uncommitted-change detection.

use std::path::{Path, PathBuf};

use crate::helpers::git_ops::GitOps;
use crate::types::Result;

/// Whether `git status` reports anything for exactly this path.
///
/// Untracked files count as dirty.
pub fn is_dirty(git: &dyn GitOps, path: &Path) -> Result<bool> {
    let status = git.run(&["status", "-z"], &[path.to_path_buf()])?;
    let dirty = !status.is_empty();
    log::debug!("{} dirty={}", path.display(), dirty);
    Ok(dirty)
}

/// The subset of `paths` with uncommitted changes, in input order.
pub fn dirty_paths(git: &dyn GitOps, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut dirty = Vec::new();
    for path in paths {
        if is_dirty(git, path)? {
            dirty.push(path.clone());
        }
    }
    Ok(dirty)
}
