//! Cached resolution.

use crate::helpers::cache::{cache_key, TimestampCache};
use crate::helpers::git_ops::GitOps;
use crate::helpers::hash::fingerprint;
use crate::ops::history::history;
use crate::ops::resolve::resolve;
use crate::types::{ContentUnit, HistoryOptions, ResolvedTimestamp, Result, SelectionPolicy};

/// Resolve through a caller-owned cache.
///
/// History is always re-read (it is the cache key); only the reduction is
/// skipped on a hit.
pub fn resolve_cached(
    git: &dyn GitOps,
    unit: &ContentUnit,
    policy: &SelectionPolicy,
    options: &HistoryOptions,
    cache: &mut dyn TimestampCache,
) -> Result<ResolvedTimestamp> {
    let history = history(git, unit, options)?;
    let key = cache_key(&fingerprint(&history), policy);
    if let Some(hit) = cache.get(&key) {
        log::debug!("cache hit for {}", unit.primary().display());
        return Ok(hit);
    }
    let resolved = resolve(&history, policy);
    cache.put(key, resolved.clone());
    Ok(resolved)
}
