//! Alphanumeric stripping

use crate::class::CharClass;

/// Remove ASCII letters and digits, leaving only special characters
///
/// Whitespace and non-ASCII characters are kept.
pub fn strip_alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|&ch| !CharClass::from_char(ch).is_alphanumeric())
        .collect()
}
