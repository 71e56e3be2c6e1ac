//! Content fingerprints for text blocks.
//!
//! A [`Fingerprint`] is the SHA-256 digest of a block's normalized form:
//!
//! ```text
//! SHA-256(FINGERPRINT_VERSION.to_be_bytes() || 0x00 || normalized_utf8)
//! ```
//!
//! The version prefix keeps fingerprints produced under different
//! normalization rules from ever comparing equal. Blocks whose normalized
//! forms are equal always share a fingerprint.
//!
//! # Examples
//!
//! ```rust
//! use canonical::fingerprint;
//!
//! let a = fingerprint("The quick  fox");
//! let b = fingerprint("the QUICK fox\n");
//! assert_eq!(a, b);
//! assert_eq!(a.to_hex().len(), 64);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::NormalizeConfig;
use crate::normalize::normalize_with;

/// Version of the fingerprint derivation. Bump on any change to the hashed
/// byte layout or to the default normalization.
pub const FINGERPRINT_VERSION: u32 = 1;

/// Fixed-size content digest of a normalized block (256 bits).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hexadecimal rendering (64 characters).
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Fingerprint a block under the default normalization.
pub fn fingerprint(text: &str) -> Fingerprint {
    fingerprint_with(text, &NormalizeConfig::default())
}

/// Fingerprint a block under an explicit normalization config.
pub fn fingerprint_with(text: &str, cfg: &NormalizeConfig) -> Fingerprint {
    hash_normalized_bytes(normalize_with(text, cfg).as_bytes())
}

/// Hash bytes that are already normalized.
pub fn hash_normalized_bytes(normalized: &[u8]) -> Fingerprint {
    let mut hasher = Sha256::new();
    hasher.update(FINGERPRINT_VERSION.to_be_bytes());
    hasher.update([0]);
    hasher.update(normalized);
    Fingerprint(hasher.finalize().into())
}
