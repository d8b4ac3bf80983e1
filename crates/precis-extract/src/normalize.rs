//! Whitespace normalization and character slicing

/// Collapse every run of whitespace to a single space and trim the ends
///
/// Newlines, tabs and repeated spaces from the format readers all become
/// single separators, so counts and previews are stable across formats.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Take a prefix of at most `max_chars` characters, cut on a char boundary
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
