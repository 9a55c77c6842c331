//! Shared text helpers used across modules.

/// Length in characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Take at most `limit` characters from the start of `value`.
pub fn take_chars(value: &str, limit: usize) -> &str {
    match value.char_indices().nth(limit) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Returns true when the trimmed value is empty.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
