//! String utility functions for naming and display.

/// Capitalize the first letter of a word
///
/// Converts the first character to uppercase and leaves the rest unchanged.
/// Returns an empty string if the input is empty.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `value` should be treated as unset during configuration layering
pub fn is_unset(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}

/// Shorten `text` to at most `width` characters by cutting from the left.
///
/// The dropped prefix is replaced with `[...]`. Text that already fits is
/// returned unchanged.
pub fn truncate_left(text: &str, width: usize) -> String {
    const MARKER: &str = "[...]";

    let length = text.chars().count();
    if length <= width {
        return text.to_string();
    }
    if width <= MARKER.len() {
        return MARKER.chars().take(width).collect();
    }

    let keep = width - MARKER.len();
    let tail: String = text.chars().skip(length - keep).collect();
    format!("{MARKER}{tail}")
}
