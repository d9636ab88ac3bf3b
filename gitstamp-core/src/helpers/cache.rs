//! Resolved-timestamp caching interface.
//!
//! The cache belongs to the caller. Keys combine a history fingerprint with
//! the selection policy, so a changed history or a different policy always
//! misses.

use std::collections::HashMap;

use crate::types::{ResolvedTimestamp, SelectionPolicy};

/// Storage for resolved timestamps keyed by content.
pub trait TimestampCache {
    fn get(&self, key: &str) -> Option<ResolvedTimestamp>;

    fn put(&mut self, key: String, value: ResolvedTimestamp);
}

/// In-process cache backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: HashMap<String, ResolvedTimestamp>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl TimestampCache for MemoryCache {
    fn get(&self, key: &str) -> Option<ResolvedTimestamp> {
        self.entries.get(key).cloned()
    }

    fn put(&mut self, key: String, value: ResolvedTimestamp) {
        self.entries.insert(key, value);
    }
}

/// Cache key for a history fingerprint under a policy.
pub fn cache_key(fingerprint: &str, policy: &SelectionPolicy) -> String {
    let policy_digest = blake3::hash(policy.descriptor().as_bytes());
    format!("{}:{}", fingerprint, policy_digest.to_hex())
}
