//! gitstamp configuration, stored in `gitstamp.toml`.
//!
//! The file declares named timestamp fields, each with its own selection
//! policy and history options:
//!
//! ```toml
//! [fields.pub_date]
//! strategy = "first"
//! ignore_commits = '\[nochange\]'
//!
//! [fields.last_mod]
//! strategy = "last"
//! skip_first_commit = true
//! ignore_commits = '\[nochange\]'
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use fs_err as fs;
use serde::{Deserialize, Serialize};

use crate::types::error::{GitstampError, Result};
use crate::types::policy::{compile_pattern, HistoryOptions, SelectionPolicy, Strategy};

pub const CONFIG_FILE_NAME: &str = "gitstamp.toml";

/// One named timestamp field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_commits: Option<String>,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub skip_first_commit: bool,
    #[serde(default)]
    pub follow_renames: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub follow_rename_threshold: Option<i64>,
}

impl FieldConfig {
    /// Build the selection policy for this field.
    ///
    /// # Errors
    ///
    /// * `Configuration` - `ignore_commits` is not a valid regex
    pub fn policy(&self) -> Result<SelectionPolicy> {
        Ok(SelectionPolicy {
            ignore_commits: self
                .ignore_commits
                .as_deref()
                .map(compile_pattern)
                .transpose()?,
            strategy: self.strategy,
            skip_first_commit: self.skip_first_commit,
        })
    }

    pub fn history_options(&self) -> HistoryOptions {
        let opts = HistoryOptions {
            follow_renames: self.follow_renames,
            rename_threshold: None,
        };
        match self.follow_rename_threshold {
            Some(threshold) => opts.with_rename_threshold(threshold),
            None => opts,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    fields: BTreeMap<String, FieldConfig>,
}

impl Config {
    /// Parse a config from TOML text, validating every field's pattern.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        for field in config.fields.values() {
            field.policy()?;
        }
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Find the config for `current_directory`.
    ///
    /// Returns `None` when the repository root has no `gitstamp.toml`.
    pub fn find(current_directory: impl AsRef<Path>) -> Option<Result<Self>> {
        let root = find_repo_root(current_directory)?;
        let config_path = root.join(CONFIG_FILE_NAME);
        log::debug!("Looking for config at {}", config_path.display());
        if config_path.is_file() {
            Some(Self::load(&config_path))
        } else {
            log::debug!("No config file found at {}", config_path.display());
            None
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldConfig> {
        self.fields.get(name)
    }

    /// Like [`Config::field`], but a missing field is a configuration error.
    pub fn require_field(&self, name: &str) -> Result<&FieldConfig> {
        self.field(name).ok_or_else(|| {
            GitstampError::configuration(format!("no field named '{}' in {}", name, CONFIG_FILE_NAME))
        })
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn insert_field(&mut self, name: impl Into<String>, field: FieldConfig) {
        self.fields.insert(name.into(), field);
    }
}

/// Walk up from `start_dir` to the first directory containing `.git` or
/// `gitstamp.toml`.
pub fn find_repo_root(start_dir: impl AsRef<Path>) -> Option<PathBuf> {
    let mut dir = start_dir.as_ref();
    log::debug!("Searching for repo root starting from {}", dir.display());

    loop {
        if dir.join(".git").exists() || dir.join(CONFIG_FILE_NAME).exists() {
            log::debug!("Found repo root at {}", dir.display());
            return Some(dir.to_path_buf());
        }
        dir = dir.parent()?;
    }
}
