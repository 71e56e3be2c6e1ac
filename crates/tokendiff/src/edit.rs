//! Word-level edit scripts.
//!
//! Both texts are split on whitespace (see [`canonical::tokenize`]) and
//! aligned with Myers' shortest edit script, whose kept words are a longest
//! common subsequence of the two word lists. The script lists the
//! words of both sides in order: words kept from both as
//! [`EditToken::Equal`], words only in the old text as
//! [`EditToken::Deleted`], words only in the new text as
//! [`EditToken::Inserted`]. Adjacent words of the same kind are merged into
//! one token joined by single spaces. Where a run of old words is replaced by
//! new ones, the deletion comes first.
//!
//! Dropping the `Inserted` tokens yields the old word sequence; dropping the
//! `Deleted` tokens yields the new one.

use canonical::tokenize;
use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};

/// One run of words in an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "text", rename_all = "lowercase")]
pub enum EditToken {
    Equal(String),
    Inserted(String),
    Deleted(String),
}

impl EditToken {
    /// The words of this run, space-joined.
    pub fn text(&self) -> &str {
        match self {
            EditToken::Equal(text) | EditToken::Inserted(text) | EditToken::Deleted(text) => text,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, EditToken::Equal(_))
    }

    /// True when the token belongs to the old text.
    pub fn in_old(&self) -> bool {
        !matches!(self, EditToken::Inserted(_))
    }

    /// True when the token belongs to the new text.
    pub fn in_new(&self) -> bool {
        !matches!(self, EditToken::Deleted(_))
    }
}

/// Accumulates words into coalesced runs.
///
/// Deleted and inserted words between two equal runs are buffered so each
/// gap is emitted as at most one deletion followed by at most one insertion.
#[derive(Default)]
struct ScriptBuilder<'t> {
    tokens: Vec<EditToken>,
    deleted: Vec<&'t str>,
    inserted: Vec<&'t str>,
}

impl<'t> ScriptBuilder<'t> {
    fn equal(&mut self, words: &[&'t str]) {
        if words.is_empty() {
            return;
        }
        self.flush_gap();
        match self.tokens.last_mut() {
            Some(EditToken::Equal(text)) => {
                text.push(' ');
                text.push_str(&words.join(" "));
            }
            _ => self.tokens.push(EditToken::Equal(words.join(" "))),
        }
    }

    fn delete(&mut self, words: &[&'t str]) {
        self.deleted.extend_from_slice(words);
    }

    fn insert(&mut self, words: &[&'t str]) {
        self.inserted.extend_from_slice(words);
    }

    fn flush_gap(&mut self) {
        if !self.deleted.is_empty() {
            self.tokens.push(EditToken::Deleted(self.deleted.join(" ")));
            self.deleted.clear();
        }
        if !self.inserted.is_empty() {
            self.tokens.push(EditToken::Inserted(self.inserted.join(" ")));
            self.inserted.clear();
        }
    }

    fn finish(mut self) -> Vec<EditToken> {
        self.flush_gap();
        self.tokens
    }
}

/// Compute the word-level edit script turning `old` into `new`.
///
/// ```rust
/// use tokendiff::{diff, EditToken};
///
/// let script = diff("Hello world", "Hello brave world");
/// assert_eq!(
///     script,
///     vec![
///         EditToken::Equal("Hello".into()),
///         EditToken::Inserted("brave".into()),
///         EditToken::Equal("world".into()),
///     ]
/// );
/// ```
pub fn diff(old: &str, new: &str) -> Vec<EditToken> {
    let old_words = tokenize(old);
    let new_words = tokenize(new);

    let mut script = ScriptBuilder::default();
    for op in capture_diff_slices(Algorithm::Myers, &old_words, &new_words) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => script.equal(&old_words[old_range]),
            DiffTag::Delete => script.delete(&old_words[old_range]),
            DiffTag::Insert => script.insert(&new_words[new_range]),
            DiffTag::Replace => {
                script.delete(&old_words[old_range]);
                script.insert(&new_words[new_range]);
            }
        }
    }
    script.finish()
}

/// Word sequence of the old text recovered from a script.
pub fn reconstruct_old(tokens: &[EditToken]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.in_old())
        .flat_map(|t| t.text().split_whitespace())
        .collect()
}

/// Word sequence of the new text recovered from a script.
pub fn reconstruct_new(tokens: &[EditToken]) -> Vec<&str> {
    tokens
        .iter()
        .filter(|t| t.in_new())
        .flat_map(|t| t.text().split_whitespace())
        .collect()
}
