//! Timestamp history types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::error::{GitstampError, Result};

/// One point in a file's history.
///
/// A real commit carries its message (possibly empty). An entry synthesized
/// from the filesystem mtime has no message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimestampEntry {
    /// Unix epoch seconds.
    pub instant: i64,
    /// Full commit message, `None` for the filesystem fallback entry.
    pub commit_message: Option<String>,
}

impl TimestampEntry {
    /// Entry for a real commit.
    pub fn commit(instant: i64, message: impl Into<String>) -> Self {
        Self {
            instant,
            commit_message: Some(message.into()),
        }
    }

    /// Entry derived from on-disk modification time.
    pub fn synthetic(instant: i64) -> Self {
        Self {
            instant,
            commit_message: None,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.commit_message.is_none()
    }
}

/// Newest-first sequence of [`TimestampEntry`] for one logical content unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<TimestampEntry>,
}

impl History {
    pub fn new(entries: Vec<TimestampEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TimestampEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimestampEntry> {
        self.entries.iter()
    }

    /// Whether the history starts with a filesystem-derived entry.
    pub fn has_synthetic(&self) -> bool {
        self.entries.first().is_some_and(TimestampEntry::is_synthetic)
    }

    /// Only the entries that came from commits.
    pub fn commits(&self) -> impl Iterator<Item = &TimestampEntry> {
        self.entries.iter().filter(|e| !e.is_synthetic())
    }
}

impl From<Vec<TimestampEntry>> for History {
    fn from(entries: Vec<TimestampEntry>) -> Self {
        Self::new(entries)
    }
}

impl IntoIterator for History {
    type Item = TimestampEntry;
    type IntoIter = std::vec::IntoIter<TimestampEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a TimestampEntry;
    type IntoIter = std::slice::Iter<'a, TimestampEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A piece of content backed by one or more files, e.g. a page and its
/// translated variants. All paths share one history.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentUnit {
    paths: Vec<PathBuf>,
}

impl ContentUnit {
    /// Create a unit from its source paths.
    ///
    /// # Errors
    ///
    /// * `Configuration` - `paths` is empty
    pub fn new<I, P>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let paths: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        if paths.is_empty() {
            return Err(GitstampError::configuration(
                "a content unit needs at least one source path",
            ));
        }
        Ok(Self { paths })
    }

    /// Unit backed by a single file.
    pub fn single(path: impl Into<PathBuf>) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn is_multi_path(&self) -> bool {
        self.paths.len() > 1
    }

    /// The primary source path.
    pub fn primary(&self) -> &Path {
        &self.paths[0]
    }
}
