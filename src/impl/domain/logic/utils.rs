/// Strips separator characters ('-' and whitespace) from a national ID, as
/// stored in the record store. Empty results map to `None`.
pub(crate) fn national_id_digits(raw: &str) -> Option<String> {
    let stripped: String = raw
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect();
    if stripped.is_empty() {
        None
    } else {
        Some(stripped)
    }
}

/// Truncates to at most `max_chars` characters, never splitting a char.
pub(crate) fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}
