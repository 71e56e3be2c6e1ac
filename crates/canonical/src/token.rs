//! Word splitting for the token differ.

/// Splits raw block text into words on Unicode whitespace.
///
/// Words borrow from `text` and keep their original case and punctuation.
///
/// ```rust
/// use canonical::tokenize;
///
/// assert_eq!(tokenize("  Hello,\u{3000}brave\n world "), vec!["Hello,", "brave", "world"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(char::is_whitespace)
        .filter(|word| !word.is_empty())
        .collect()
}
