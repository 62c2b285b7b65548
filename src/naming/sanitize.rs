//! Filename component cleanup
//!
//! All transformations here are idempotent: applying them a second time
//! changes nothing, which is what makes repeated runs of the tool safe.

use crate::constants::INVALID_FILENAME_CHARS;

/// Strips characters that are invalid in filenames and trims whitespace
///
/// # Arguments
/// * `name` - The filename to sanitize
///
/// # Returns
/// * `String` - The sanitized filename
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Formats an invoice number for use in a filename
///
/// Removes all whitespace, then replaces every `/` with `-`.
pub fn format_invoice_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '/' { '-' } else { c })
        .collect()
}

/// Normalizes a filename component into a lowercase hyphenated token
///
/// Whitespace runs collapse to a single hyphen; surrounding whitespace
/// disappears with them.
pub fn normalize_component(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
