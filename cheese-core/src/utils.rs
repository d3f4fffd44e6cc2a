//! Shared string helpers.

/// Upper-case the first character of a string, leaving the rest unchanged
/// (e.g., "zh-rTW" -> "Zh-rTW")
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Treat blank strings as absent.
///
/// Whitespace only decides blankness; a kept value is returned untouched.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
