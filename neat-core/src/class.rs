//! Character classification used by the removal rules

/// Coarse character classes relevant to cleaning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// ASCII letter, either case
    Alpha,
    /// ASCII digit `0`-`9`
    Digit,
    /// ASCII punctuation (the 32 characters of `!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~`)
    Punctuation,
    /// Whitespace of any kind
    Space,
    /// Everything else, including all non-ASCII characters
    Other,
}

impl CharClass {
    /// Classify a single character
    #[inline]
    pub fn from_char(ch: char) -> Self {
        if ch.is_ascii_digit() {
            CharClass::Digit
        } else if ch.is_ascii_alphabetic() {
            CharClass::Alpha
        } else if ch.is_ascii_punctuation() {
            CharClass::Punctuation
        } else if ch.is_whitespace() {
            CharClass::Space
        } else {
            CharClass::Other
        }
    }

    /// True for ASCII letters and digits
    #[inline]
    pub fn is_alphanumeric(self) -> bool {
        matches!(self, CharClass::Alpha | CharClass::Digit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_from_char() {
        assert_eq!(CharClass::from_char('a'), CharClass::Alpha);
        assert_eq!(CharClass::from_char('Z'), CharClass::Alpha);
        assert_eq!(CharClass::from_char('5'), CharClass::Digit);
        assert_eq!(CharClass::from_char(','), CharClass::Punctuation);
        assert_eq!(CharClass::from_char('~'), CharClass::Punctuation);
        assert_eq!(CharClass::from_char(' '), CharClass::Space);
        assert_eq!(CharClass::from_char('\t'), CharClass::Space);
        assert_eq!(CharClass::from_char('★'), CharClass::Other);
    }

    #[test]
    fn test_non_ascii_is_never_removable() {
        // Full-width digits and CJK punctuation stay out of the ASCII classes
        assert_eq!(CharClass::from_char('５'), CharClass::Other);
        assert_eq!(CharClass::from_char('。'), CharClass::Other);
        assert_eq!(CharClass::from_char('é'), CharClass::Other);
    }

    #[test]
    fn test_punctuation_set_matches_ascii_table() {
        let punctuation: String = (0u8..128)
            .map(char::from)
            .filter(|&ch| CharClass::from_char(ch) == CharClass::Punctuation)
            .collect();
        assert_eq!(punctuation, "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~");
    }
}
