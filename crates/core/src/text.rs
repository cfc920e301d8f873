//! Text helpers shared by the logging call sites.

/// Truncate `text` to at most `max_chars` characters for a log preview.
///
/// Counts `char`s, not bytes, so Arabic input never splits mid code point.
/// Appends `...` when anything was cut.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
