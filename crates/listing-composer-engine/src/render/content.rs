//! Line-oriented mini-syntax shared by the structured block types.

/// Separator between the two fields of a structured line.
pub const FIELD_SEPARATOR: char = '|';

/// Non-blank lines of `content`, trimmed. Handles `\r\n` endings.
pub fn content_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Splits `line` on the first `separator` into trimmed halves.
///
/// A line without the separator yields the whole line and an empty second
/// field.
pub fn split_pair(line: &str, separator: char) -> (&str, &str) {
    match line.split_once(separator) {
        Some((first, second)) => (first.trim(), second.trim()),
        None => (line.trim(), ""),
    }
}

/// [`content_lines`] parsed as `first | second` pairs.
pub fn field_pairs(content: &str) -> Vec<(&str, &str)> {
    content_lines(content)
        .into_iter()
        .map(|line| split_pair(line, FIELD_SEPARATOR))
        .collect()
}
