//! gitstamp Core Library
//!
//! Resolves "when was this content last (or first) changed" from git history,
//! with the filesystem mtime as a fallback for untracked or dirty files.
//!
//! # Architecture
//!
//! - `types`: Core data types (TimestampEntry, History, SelectionPolicy, Config, errors)
//! - `ops`: High-level operations (history, resolve, dependency tracking, caching)
//! - `helpers`: Low-level utilities (git invocation, dirty detection, mtimes, hashing)
//!
//! # Example
//!
//! ```no_run
//! use gitstamp_core::{resolve_timestamp, ContentUnit, GitCli, HistoryOptions, SelectionPolicy, Strategy};
//!
//! let git = GitCli::new();
//! let unit = ContentUnit::new(["content/about/contents.lr", "content/about/contents+de.lr"])?;
//! let policy = SelectionPolicy::new(Strategy::First).with_ignore_commits(r"\[nochange\]")?;
//! let pub_date = resolve_timestamp(&git, &unit, &policy, &HistoryOptions::default())?;
//! println!("{:?}", pub_date.to_local());
//! # Ok::<(), gitstamp_core::GitstampError>(())
//! ```

pub mod helpers;
pub mod ops;
pub mod types;

// Re-export commonly used types at crate root
pub use types::{
    find_repo_root, Config, ContentUnit, FieldConfig, FieldValue, GitstampError, History,
    HistoryOptions, ResolvedTimestamp, Result, SelectionPolicy, Strategy, TimestampEntry,
};

// Re-export operations at crate root
pub use ops::{field_value, history, resolve, resolve_cached, resolve_timestamp, select};
pub use ops::ContentDependency;

pub use helpers::cache::{cache_key, MemoryCache, TimestampCache};
pub use helpers::git_ops::{GitCli, GitOps};
pub use helpers::hash::fingerprint;
