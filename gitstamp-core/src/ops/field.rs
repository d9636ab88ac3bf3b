//! Timestamp field values.
//!
//! A content source may set a timestamp field by hand. Only an empty field
//! is derived from git.

use chrono::{NaiveDate, NaiveDateTime};

use crate::helpers::git_ops::GitOps;
use crate::ops::resolve::resolve_timestamp;
use crate::types::{ContentUnit, FieldValue, GitstampError, HistoryOptions, Result, SelectionPolicy};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a hand-written date-time (local wall-clock time).
///
/// A bare date means midnight.
pub fn parse_datetime(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| GitstampError::invalid_date(raw))
}

/// Value of a timestamp field for `unit`.
///
/// A non-blank `raw` value is parsed and returned as is; git is not run.
///
/// # Errors
///
/// * `InvalidDate` - `raw` is set but not a date-time
/// * `Configuration`, `Invocation` - see [`resolve_timestamp`]
pub fn field_value(
    raw: Option<&str>,
    git: &dyn GitOps,
    unit: &ContentUnit,
    policy: &SelectionPolicy,
    options: &HistoryOptions,
) -> Result<FieldValue> {
    match raw.map(str::trim).filter(|r| !r.is_empty()) {
        Some(raw) => Ok(FieldValue::Explicit(parse_datetime(raw)?)),
        None => Ok(FieldValue::Resolved(resolve_timestamp(git, unit, policy, options)?)),
    }
}
