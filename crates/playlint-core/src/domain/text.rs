//! Text normalization applied before measuring an asset.

/// Converts CRLF line endings to LF and trims surrounding whitespace.
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").trim().to_string()
}

/// Length of `text` after normalization, counted in chars.
pub fn trimmed_length(text: &str) -> usize {
    normalize(text).chars().count()
}
