//! File name helpers for exported documents.

const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Replaces characters that are not allowed in file names on common
/// platforms with `_` and trims surrounding whitespace and dots.
pub fn escape_filename(name: &str) -> String {
    let escaped: String = name
        .chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '_' } else { c })
        .collect();

    let trimmed = escaped.trim().trim_matches('.');
    if trimmed.is_empty() {
        "export".to_string()
    } else {
        trimmed.to_string()
    }
}
