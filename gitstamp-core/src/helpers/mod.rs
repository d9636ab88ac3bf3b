//! Low-level helper utilities.

pub mod cache;
pub mod dirty;
pub mod git_ops;
pub mod hash;
pub mod mtime;
