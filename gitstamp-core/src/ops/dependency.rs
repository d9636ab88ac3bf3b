//! Content dependency tracking.
//!
//! A build system that derives pages from a resolved timestamp registers a
//! [`ContentDependency`] per content unit. The dependency is stale once the
//! unit's history fingerprint changes: a new commit, an amended message, or
//! a dirty working tree with a different mtime.

use crate::helpers::git_ops::GitOps;
use crate::helpers::hash::fingerprint;
use crate::ops::history::history;
use crate::types::{ContentUnit, HistoryOptions, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDependency {
    unit: ContentUnit,
    options: HistoryOptions,
    fingerprint: String,
}

impl ContentDependency {
    /// Record the current state of `unit`'s history.
    pub fn capture(git: &dyn GitOps, unit: &ContentUnit, options: &HistoryOptions) -> Result<Self> {
        let history = history(git, unit, options)?;
        Ok(Self {
            unit: unit.clone(),
            options: *options,
            fingerprint: fingerprint(&history),
        })
    }

    pub fn unit(&self) -> &ContentUnit {
        &self.unit
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Whether the history has changed since capture.
    pub fn is_stale(&self, git: &dyn GitOps) -> Result<bool> {
        let current = fingerprint(&history(git, &self.unit, &self.options)?);
        if current != self.fingerprint {
            log::debug!(
                "{} changed: {} -> {}",
                self.unit.primary().display(),
                self.fingerprint,
                current
            );
        }
        Ok(current != self.fingerprint)
    }
}
