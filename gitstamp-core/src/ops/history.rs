//! History extraction.

use crate::helpers::dirty::dirty_paths;
use crate::helpers::git_ops::GitOps;
use crate::helpers::mtime::fs_time;
use crate::types::{ContentUnit, GitstampError, History, HistoryOptions, Result, TimestampEntry};

/// Build the newest-first timestamp history of a content unit.
///
/// The result holds every commit touching any of the unit's paths. When the
/// log is empty, or any path has uncommitted changes, an entry derived from
/// the on-disk mtime (of the dirty paths, or of all paths when there is no
/// log) is placed first. A unit with no history and no file on disk yields
/// an empty history.
///
/// # Errors
///
/// * `Configuration` - `follow_renames` requested for a multi-path unit;
///   raised before git is run
/// * `Invocation` - git failed or produced unparsable output
pub fn history(git: &dyn GitOps, unit: &ContentUnit, options: &HistoryOptions) -> Result<History> {
    let args = log_args(unit, options)?;
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let output = git.run(&arg_refs, unit.paths())?;

    let dirty = dirty_paths(git, unit.paths())?;
    let mut entries = Vec::new();

    if output.is_empty() || !dirty.is_empty() {
        let fallback_paths = if output.is_empty() { unit.paths() } else { &dirty[..] };
        log::debug!(
            "using filesystem mtime for {:?} (log empty: {}, dirty: {})",
            fallback_paths,
            output.is_empty(),
            dirty.len()
        );
        if let Some(ts) = fs_time(fallback_paths) {
            entries.push(TimestampEntry::synthetic(ts));
        }
    }

    if !output.is_empty() {
        entries.extend(parse_log(&output)?);
    }

    Ok(History::new(entries))
}

fn log_args(unit: &ContentUnit, options: &HistoryOptions) -> Result<Vec<String>> {
    let mut args = vec![
        "log".to_string(),
        "--pretty=format:%at %B".to_string(),
        "-z".to_string(),
    ];
    if options.follow_renames {
        if unit.is_multi_path() {
            return Err(GitstampError::configuration(format!(
                "cannot follow renames for a content unit with {} source paths",
                unit.paths().len()
            )));
        }
        args.push("--follow".to_string());
        if let Some(threshold) = options.rename_threshold {
            args.push(format!("-M{}%", threshold));
        }
    }
    args.push("--remove-empty".to_string());
    Ok(args)
}

/// Parse NUL-separated `<epoch> <message>` records.
fn parse_log(output: &str) -> Result<Vec<TimestampEntry>> {
    output
        .split('\0')
        .map(|record| {
            // tolerate a newline left over from the previous record's body
            let record = record.trim_start_matches('\n');
            let (ts, message) = record.split_once(' ').unwrap_or((record, ""));
            let instant = ts.trim().parse::<i64>().map_err(|_| {
                GitstampError::invocation("log", format!("unexpected log record {:?}", record))
            })?;
            Ok(TimestampEntry::commit(instant, message.trim_end()))
        })
        .collect()
}
