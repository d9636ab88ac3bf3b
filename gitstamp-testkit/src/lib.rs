//! gitstamp Test Kit.
//!
//! Integration tests for history extraction need real `git log` and
//! `git status` output. [`TestRepo`] builds throwaway repositories with
//! commits at chosen author times.
//!
//! # Example
//!
//! ```no_run
//! use gitstamp_core::{history, ContentUnit, HistoryOptions};
//! use gitstamp_testkit::TestRepo;
//!
//! let repo = TestRepo::new().unwrap();
//! repo.commit("test.txt", 1589238186, "message").unwrap();
//!
//! let unit = ContentUnit::single(repo.path("test.txt"));
//! let h = history(&repo.git(), &unit, &HistoryOptions::default()).unwrap();
//! assert_eq!(h.len(), 1);
//! ```

mod repo;

pub use repo::{TestRepo, TestRepoError, INITIAL_COMMIT_TIME};

/// Re-export gitstamp_core for convenience in tests.
pub use gitstamp_core;
