//! Integer extraction from numeric-looking strings

/// Drop every character that is not an ASCII digit
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(char::is_ascii_digit).collect()
}

/// Parse the digits of `text` as an integer
///
/// All non-digit characters are discarded first, so separators, signs and
/// decimal points do not survive: `"1,024"` is `1024` and `"123.45"` is
/// `12345`. Returns `None` when no digit remains or the value overflows.
pub fn parse_integer(text: &str) -> Option<i64> {
    let digits = strip_non_digits(text);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
