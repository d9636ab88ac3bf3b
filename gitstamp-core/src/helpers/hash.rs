//! Blake3 fingerprinting of timestamp histories.

use blake3::Hasher;

use crate::types::History;

/// Version tag mixed into every fingerprint; bump when the encoding changes.
const FINGERPRINT_VERSION: &[u8] = b"gitstamp-history-v1";

/// Compute a stable digest of a history.
///
/// The encoding is length-prefixed and fixed-endian, so the result depends
/// only on the ordered `(instant, message)` pairs. A synthetic entry and a
/// commit with an empty message encode differently.
pub fn fingerprint(history: &History) -> String {
    let mut hasher = Hasher::new();
    hasher.update(FINGERPRINT_VERSION);
    hasher.update(&(history.len() as u64).to_le_bytes());
    for entry in history {
        hasher.update(&entry.instant.to_le_bytes());
        match &entry.commit_message {
            None => {
                hasher.update(&[0u8]);
            }
            Some(message) => {
                hasher.update(&[1u8]);
                hasher.update(&(message.len() as u64).to_le_bytes());
                hasher.update(message.as_bytes());
            }
        }
    }
    hasher.finalize().to_hex().to_string()
}
