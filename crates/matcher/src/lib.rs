//! # revcmp matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` decides which block of the old rendition corresponds to which
//! block of the new one. It consumes two ordered lists of
//! [`TextBlock`](canonical::TextBlock) values and produces
//! [`PairingRecord`]s that account for every block exactly once.
//!
//! ## Core Types
//!
//! - [`MatchMode`]: selects the pairing strategy:
//!   - `Positional`: block `i` of A with block `i` of B.
//!   - `Content`: exact fingerprint matches, then first-fit similarity.
//! - [`MatchConfig`]: mode, `similarity_threshold` (default 0.8, must lie in
//!   `(0, 1]`), optional parallel scoring, normalization rules.
//! - [`Matcher`]: validated at construction, infallible afterwards.
//! - [`similarity`]: Ratcliff/Obershelp character ratio.
//!
//! ## Example Usage
//!
//! ```
//! use canonical::blocks_from_strings;
//! use matcher::{MatchConfig, MatchKind, Matcher, PairingRecord};
//!
//! let old = blocks_from_strings(["Alpha", "Beta"]);
//! let new = blocks_from_strings(["Beta", "Gamma"]);
//!
//! let matcher = Matcher::new(MatchConfig::default()).expect("valid config");
//! let records = matcher.pair(&old, &new);
//!
//! assert!(matches!(
//!     records[0],
//!     PairingRecord::Matched { kind: MatchKind::Exact, .. }
//! ));
//! assert!(matches!(records[1], PairingRecord::RemovedOnly { .. }));
//! assert!(matches!(records[2], PairingRecord::AddedOnly { .. }));
//! ```
//!
//! ## Tie-breaking
//!
//! The similarity pass is greedy: each unmatched A block, in original order,
//! takes the *first* remaining B block (in B's original order) whose ratio
//! reaches the threshold, not the best-scoring one.

pub mod engine;
pub mod similarity;
pub mod types;

pub use crate::engine::{pair_positional, Matcher};
pub use crate::similarity::{similarity, similarity_upper_bound};
pub use crate::types::{MatchConfig, MatchError, MatchKind, MatchMode, PairingRecord};
