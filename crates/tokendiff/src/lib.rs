//! # revcmp token differ (`tokendiff`)
//!
//! Given the old and new text of a matched block pair, compute which words
//! were kept, removed and added, and render that as an annotated line:
//!
//! ```rust
//! use tokendiff::{diff, render, DiffMarkers};
//!
//! let script = diff("Hello world", "Hello brave world");
//! assert_eq!(render(&script, &DiffMarkers::default()), "Hello [ADDED: brave] world");
//! ```
//!
//! Words are aligned with the `similar` crate's
//! [`Algorithm::Myers`](similar::Algorithm::Myers). Myers finds a shortest
//! edit script, so the words it keeps (the `Equal` runs) form a longest
//! common subsequence of the two word lists.
//! The differ works on raw text: case and punctuation changes show up as
//! edits.

mod edit;
mod render;

pub use crate::edit::{diff, reconstruct_new, reconstruct_old, EditToken};
pub use crate::render::{diff_rendered, render, DiffMarkers};
