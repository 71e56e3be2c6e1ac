//! Flat-string rendering of edit scripts.
//!
//! Equal runs pass through unchanged; deleted and inserted runs are wrapped
//! as `[REMOVED: …]` and `[ADDED: …]`. Runs are joined with single spaces in
//! script order.

use serde::{Deserialize, Serialize};

use crate::edit::{diff, EditToken};

/// Labels used inside the change markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffMarkers {
    #[serde(default = "DiffMarkers::default_removed")]
    pub removed: String,
    #[serde(default = "DiffMarkers::default_added")]
    pub added: String,
}

impl DiffMarkers {
    fn default_removed() -> String {
        "REMOVED".to_string()
    }

    fn default_added() -> String {
        "ADDED".to_string()
    }

    /// Markers with custom labels, e.g. for a localized report.
    pub fn new(removed: impl Into<String>, added: impl Into<String>) -> Self {
        Self {
            removed: removed.into(),
            added: added.into(),
        }
    }

    fn wrap(label: &str, text: &str) -> String {
        format!("[{label}: {text}]")
    }
}

impl Default for DiffMarkers {
    fn default() -> Self {
        Self {
            removed: Self::default_removed(),
            added: Self::default_added(),
        }
    }
}

/// Render a script as one annotated line.
pub fn render(tokens: &[EditToken], markers: &DiffMarkers) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(tokens.len());
    for token in tokens {
        parts.push(match token {
            EditToken::Equal(text) => text.clone(),
            EditToken::Deleted(text) => DiffMarkers::wrap(&markers.removed, text),
            EditToken::Inserted(text) => DiffMarkers::wrap(&markers.added, text),
        });
    }
    parts.join(" ")
}

/// Diff two texts and render the result.
///
/// ```rust
/// use tokendiff::{diff_rendered, DiffMarkers};
///
/// let line = diff_rendered("Hello world", "Hello brave world", &DiffMarkers::default());
/// assert_eq!(line, "Hello [ADDED: brave] world");
/// ```
pub fn diff_rendered(old: &str, new: &str, markers: &DiffMarkers) -> String {
    render(&diff(old, new), markers)
}
