// src/export/sanitize.rs

use std::borrow::Cow;

/// Characters that make spreadsheet software treat a cell as a formula.
const FORMULA_TRIGGERS: [char; 5] = ['@', '+', '-', '=', '|'];

/// Neutralizes formula injection in a cell value.
///
/// Values starting with one of `@ + - = |` get their `|` escaped and are
/// wrapped in single quotes; everything else is returned unchanged.
pub fn escape(payload: &str) -> Cow<'_, str> {
    match payload.chars().next() {
        Some(first) if FORMULA_TRIGGERS.contains(&first) => {
            Cow::Owned(format!("'{}'", payload.replace('|', r"\|")))
        }
        _ => Cow::Borrowed(payload),
    }
}
