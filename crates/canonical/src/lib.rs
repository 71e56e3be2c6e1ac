//! revcmp canonical block layer.
//!
//! This crate turns extracted paragraphs into comparable units and gives each
//! one a stable content identity. The matcher relies on it for its
//! exact-match pass; the token differ relies on its tokenizer.
//!
//! ## What we do
//!
//! - [`TextBlock`]: immutable text plus its original index
//! - Normalization: case folding, whitespace collapsing, optional NFKC
//! - Fingerprints: version-aware SHA-256 over the normalized form
//! - Whitespace tokenization
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same normalized form and the same fingerprint on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `normalize(normalize(s)) == normalize(s)`
//! - `normalize(s1) == normalize(s2)` implies `fingerprint(s1) == fingerprint(s2)`
//! - Fingerprint = SHA-256(version || 0x00 || normalized_text)

mod block;
mod config;
mod hash;
mod normalize;
mod token;

pub use crate::block::{blocks_from_lines, blocks_from_strings, TextBlock};
pub use crate::config::NormalizeConfig;
pub use crate::hash::{
    fingerprint, fingerprint_with, hash_normalized_bytes, Fingerprint, FINGERPRINT_VERSION,
};
pub use crate::normalize::{collapse_whitespace, normalize, normalize_with};
pub use crate::token::tokenize;
