//! Block normalization.
//!
//! This module provides [`normalize`], which canonicalizes a text block for
//! fingerprinting, and [`collapse_whitespace`], the whitespace-only half of
//! that transform.
//!
//! # Algorithm
//!
//! 1. Optionally apply Unicode NFKC
//! 2. Optionally fold to lowercase
//! 3. Split on any Unicode whitespace run and join with single ASCII spaces
//!
//! The result has no leading or trailing whitespace, and applying the
//! transform twice yields the same string as applying it once.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{collapse_whitespace, normalize};
//!
//! assert_eq!(normalize("  The QUICK\n\tfox "), "the quick fox");
//! assert_eq!(collapse_whitespace("  The QUICK\n\tfox "), "The QUICK fox");
//! ```

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;

/// Normalize a block with the default [`NormalizeConfig`].
///
/// Folds case, collapses every whitespace run (newlines included) to a single
/// ASCII space, and trims both ends. Pure and total.
pub fn normalize(text: &str) -> String {
    normalize_with(text, &NormalizeConfig::default())
}

/// Normalize a block under an explicit configuration.
pub fn normalize_with(text: &str, cfg: &NormalizeConfig) -> String {
    let unicode: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    let cased: Cow<str> = if cfg.lowercase {
        Cow::Owned(unicode.to_lowercase())
    } else {
        unicode
    };

    collapse_whitespace(&cased)
}

/// Collapses repeated whitespace, trims edges, and turns newlines into
/// single spaces.
///
/// All Unicode whitespace characters are treated as delimiters, including
/// tabs, carriage returns and the non-breaking space.
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello\r\n\r\nworld"), "hello world");
/// assert_eq!(collapse_whitespace("hello\u{00A0}world"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
