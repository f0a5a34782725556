//! Offset-preserving case folding.

/// Lowercases one character without changing position accounting.
///
/// Characters whose Unicode lowercasing expands to multiple characters are
/// folded to the first one so every content offset maps to exactly one folded
/// character.
pub(crate) fn fold_char(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

/// Folds a string into a vector of lowercased characters, one per input char.
pub(crate) fn fold_chars(text: &str) -> Vec<char> {
    text.chars().map(fold_char).collect()
}
