// src/util/text.rs

/// Extract the first non-empty line of a note body, trimmed.
///
/// # Examples
///
/// ```
/// use notehub::util::text::first_line;
///
/// let content = "\n  Buy milk  \nand bread";
/// assert_eq!(first_line(content), "Buy milk");
/// ```
pub fn first_line(content: &str) -> &str {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

/// One-line summary of a note body for terminal listings.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    truncate_chars(first_line(content), max_chars)
}
