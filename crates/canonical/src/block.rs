//! Text blocks: the unit of comparison.
//!
//! A [`TextBlock`] is one extracted paragraph together with its position in
//! the list it came from. Blocks are built once by the calling layer (usually
//! from a document reader's output) and only read afterwards.
//!
//! # Examples
//!
//! ```rust
//! use canonical::{blocks_from_lines, blocks_from_strings};
//!
//! let blocks = blocks_from_strings(["  First ", "", "Second"]);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[1].index(), 1);
//! assert_eq!(blocks[1].text(), "Second");
//!
//! let page = "Title\n\n  Body line  \n";
//! let lines = blocks_from_lines(page);
//! assert_eq!(lines.len(), 2);
//! assert_eq!(lines[1].text(), "Body line");
//! ```

use serde::Serialize;

/// One block of text and its original sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextBlock {
    index: usize,
    text: String,
}

impl TextBlock {
    /// Create a block at `index`. The text is stored verbatim.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// Position of the block within its source list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Raw block text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for TextBlock {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Build blocks from extracted strings.
///
/// Each string is trimmed; strings that are empty after trimming are
/// skipped. Surviving blocks are numbered consecutively from zero.
pub fn blocks_from_strings<I, S>(items: I) -> Vec<TextBlock>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .filter_map(|item| {
            let trimmed = item.as_ref().trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .enumerate()
        .map(|(index, text)| TextBlock::new(index, text))
        .collect()
}

/// Split a page of extracted text into one block per non-blank line.
pub fn blocks_from_lines(text: &str) -> Vec<TextBlock> {
    blocks_from_strings(text.lines())
}
