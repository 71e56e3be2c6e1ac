//! Configuration for block normalization.
//!
//! [`NormalizeConfig`] controls how a text block is canonicalized before it
//! is fingerprinted. The default reproduces the plain contract used by the
//! matcher: fold case, collapse whitespace, trim.
//!
//! # Examples
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert!(config.lowercase);
//! assert!(!config.normalize_unicode);
//!
//! let nfkc = NormalizeConfig {
//!     normalize_unicode: true,
//!     ..Default::default()
//! };
//! assert!(nfkc.lowercase);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for block normalization.
///
/// Cheap to clone and serializable so it can be embedded in a matcher or
/// comparison config:
///
/// ```json
/// {
///   "lowercase": true,
///   "normalize_unicode": false
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// If true, apply locale-free Unicode lowercasing.
    ///
    /// Two blocks that differ only in case then share a fingerprint.
    ///
    /// # Default
    ///
    /// `true`
    #[serde(default = "NormalizeConfig::default_lowercase")]
    pub lowercase: bool,

    /// If true, apply Unicode NFKC normalization before case folding.
    ///
    /// Useful when the two renditions were extracted by different readers
    /// that disagree on composed vs. decomposed forms (`"é"` vs `"e\u{301}"`).
    ///
    /// # Default
    ///
    /// `false`
    #[serde(default)]
    pub normalize_unicode: bool,
}

impl NormalizeConfig {
    fn default_lowercase() -> bool {
        true
    }

    /// Enable or disable case folding.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Enable or disable NFKC normalization.
    pub fn with_unicode_normalization(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            normalize_unicode: false,
        }
    }
}
