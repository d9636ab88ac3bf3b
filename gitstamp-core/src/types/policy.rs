//! Selection policy and history options.
//!
//! Both can be built directly or parsed from the string option map a host
//! attaches to a field definition.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::error::{GitstampError, Result};

/// Reduction rule applied to a filtered history.
///
/// `First` and `Last` are positional, `Earliest` and `Latest` compare
/// instants. They only differ when a history is out of chronological order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Chronologically first entry (last element of the history).
    First,
    /// Minimum instant.
    Earliest,
    /// Maximum instant.
    Latest,
    /// Newest entry (first element of the history).
    #[default]
    Last,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::First => "first",
            Strategy::Earliest => "earliest",
            Strategy::Latest => "latest",
            Strategy::Last => "last",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = GitstampError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Strategy::First),
            "earliest" => Ok(Strategy::Earliest),
            "latest" => Ok(Strategy::Latest),
            "last" => Ok(Strategy::Last),
            _ => Err(GitstampError::configuration(format!(
                "unknown strategy '{}' (expected first, earliest, latest or last)",
                s
            ))),
        }
    }
}

/// How a history is reduced to a single timestamp.
#[derive(Debug, Clone, Default)]
pub struct SelectionPolicy {
    /// Commits whose message matches (search, not full match) are dropped.
    pub ignore_commits: Option<Regex>,
    pub strategy: Strategy,
    /// Drop the chronologically first remaining entry before reducing.
    pub skip_first_commit: bool,
}

impl SelectionPolicy {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Set the ignore pattern.
    ///
    /// # Errors
    ///
    /// * `Configuration` - `pattern` is not a valid regex
    pub fn with_ignore_commits(mut self, pattern: &str) -> Result<Self> {
        self.ignore_commits = Some(compile_pattern(pattern)?);
        Ok(self)
    }

    pub fn with_skip_first_commit(mut self, skip: bool) -> Self {
        self.skip_first_commit = skip;
        self
    }

    /// Parse the host's option map.
    ///
    /// Recognised keys: `ignore_commits`, `strategy`, `skip_first_commit`.
    /// Unknown keys are left for other consumers.
    pub fn from_options(options: &BTreeMap<String, String>) -> Result<Self> {
        let mut policy = Self::default();
        if let Some(pattern) = options.get("ignore_commits") {
            policy = policy.with_ignore_commits(pattern)?;
        }
        if let Some(strategy) = options.get("strategy") {
            policy.strategy = strategy.parse()?;
        }
        policy.skip_first_commit =
            bool_from_string(options.get("skip_first_commit").map(String::as_str), false);
        Ok(policy)
    }

    /// Canonical textual form, stable across processes.
    pub fn descriptor(&self) -> String {
        format!(
            "strategy={};skip_first_commit={};ignore_commits={}",
            self.strategy,
            self.skip_first_commit,
            self.ignore_commits.as_ref().map(Regex::as_str).unwrap_or("")
        )
    }
}

impl PartialEq for SelectionPolicy {
    fn eq(&self, other: &Self) -> bool {
        self.descriptor() == other.descriptor()
    }
}

/// Options controlling how history is queried.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HistoryOptions {
    /// Track a single file across renames (`git log --follow`).
    pub follow_renames: bool,
    /// Rename similarity threshold in percent (`-M<n>%`).
    pub rename_threshold: Option<u8>,
}

impl HistoryOptions {
    pub fn follow_renames() -> Self {
        Self {
            follow_renames: true,
            rename_threshold: None,
        }
    }

    /// Set the rename threshold. Values outside 0..=100 are ignored and
    /// git's default similarity applies.
    pub fn with_rename_threshold(mut self, threshold: i64) -> Self {
        match u8::try_from(threshold) {
            Ok(t) if t <= 100 => self.rename_threshold = Some(t),
            _ => {
                log::warn!(
                    "ignoring rename threshold {}: must be between 0 and 100",
                    threshold
                );
                self.rename_threshold = None;
            }
        }
        self
    }

    /// Parse the host's option map.
    ///
    /// Recognised keys: `follow_renames`, `follow_rename_threshold`.
    pub fn from_options(options: &BTreeMap<String, String>) -> Self {
        let mut opts = Self {
            follow_renames: bool_from_string(
                options.get("follow_renames").map(String::as_str),
                false,
            ),
            rename_threshold: None,
        };
        if let Some(raw) = options.get("follow_rename_threshold") {
            match raw.trim().parse::<i64>() {
                Ok(n) => opts = opts.with_rename_threshold(n),
                Err(_) => log::warn!("ignoring non-numeric rename threshold {:?}", raw),
            }
        }
        opts
    }
}

/// Parse a boolean the way field options are written by hand.
///
/// Returns `default` for absent or unrecognised values.
pub fn bool_from_string(value: Option<&str>, default: bool) -> bool {
    let Some(value) = value else {
        return default;
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => true,
        "false" | "no" | "0" | "off" => false,
        _ => default,
    }
}

pub(crate) fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        GitstampError::configuration(format!("invalid ignore_commits pattern '{}': {}", pattern, e))
    })
}
