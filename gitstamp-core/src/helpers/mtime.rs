//! Filesystem modification-time fallback.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use fs_err as fs;

/// Modification time of one file, truncated to whole seconds.
///
/// A file that cannot be stat'ed is reported through `log::warn!` and yields
/// `None`; a missing file is a valid state here.
pub fn file_mtime(path: &Path) -> Option<i64> {
    let modified = match fs::metadata(path).and_then(|m| m.modified()) {
        Ok(modified) => modified,
        Err(e) => {
            // fs_err already names the path in its message
            log::warn!("{}", e);
            return None;
        }
    };
    let secs = match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_secs()).unwrap_or(i64::MAX),
        // pre-1970 mtimes; floor to the whole second below
        Err(e) => {
            let before = e.duration();
            let whole = i64::try_from(before.as_secs()).unwrap_or(i64::MAX);
            if before.subsec_nanos() > 0 {
                -whole - 1
            } else {
                -whole
            }
        }
    };
    Some(secs)
}

/// Most recent modification time across `paths`.
///
/// Paths that cannot be stat'ed are skipped. Returns `None` only when every
/// path failed (or `paths` is empty).
pub fn fs_time(paths: &[PathBuf]) -> Option<i64> {
    paths.iter().filter_map(|p| file_mtime(p)).max()
}
