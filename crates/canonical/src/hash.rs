//! Hashing utilities for canonical names.
//!
//! Callers that persist canonical forms (for example a customer table with a
//! canonical-name column) index them by a version-aware key:
//!
//! ```text
//! SHA-256(version.to_be_bytes() || 0x00 || canonical_bytes)
//! ```
//!
//! Including the version keeps keys produced by different canonicalization
//! versions from colliding after an upgrade.
//!
//! ```rust
//! use canonical::{hash_canonical_bytes, hash_name};
//!
//! assert_eq!(hash_name("ABC").len(), 64);
//! assert_ne!(hash_canonical_bytes(1, b"ABC"), hash_canonical_bytes(2, b"ABC"));
//! ```

use sha2::{Digest, Sha256};

/// Hash arbitrary text with SHA-256 and return a lowercase hex digest.
///
/// Not version-aware; meant for diagnostics and log correlation of raw
/// names. Use [`hash_canonical_bytes`] for stored keys.
pub fn hash_name(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// Compute the version-aware key of a canonical name.
pub fn hash_canonical_bytes(canonical_version: u32, canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_version.to_be_bytes());
    hasher.update([0]);
    hasher.update(canonical_bytes);
    hex::encode(hasher.finalize())
}
