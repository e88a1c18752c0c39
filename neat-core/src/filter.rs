//! Digit and punctuation removal with protected substrings

use crate::class::CharClass;
use crate::keep::KeepSet;
use crate::span::SpanSet;

/// Compiled, validated filter applied to one string at a time
///
/// Built through [`FilterConfig::compile`](crate::FilterConfig::compile).
/// A filter is immutable and can be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    remove_digits: bool,
    remove_punctuation: bool,
    keep: KeepSet,
    keep_num: usize,
}

impl TextFilter {
    pub(crate) fn new(
        remove_digits: bool,
        remove_punctuation: bool,
        keep: KeepSet,
        keep_num: usize,
    ) -> Self {
        Self {
            remove_digits,
            remove_punctuation,
            keep,
            keep_num,
        }
    }

    /// Whether digits are removal candidates
    pub fn removes_digits(&self) -> bool {
        self.remove_digits
    }

    /// Whether punctuation is a removal candidate
    pub fn removes_punctuation(&self) -> bool {
        self.remove_punctuation
    }

    /// Protected substrings
    pub fn keep(&self) -> &KeepSet {
        &self.keep
    }

    /// Leading digits exempt from removal
    pub fn keep_num(&self) -> usize {
        self.keep_num
    }

    /// Spans of `text` the removal rules will leave alone
    pub fn protected_spans(&self, text: &str) -> SpanSet {
        self.keep.protected_spans(text)
    }

    /// Filter a single string
    pub fn apply(&self, text: &str) -> String {
        if text.is_empty() || (!self.remove_digits && !self.remove_punctuation) {
            return text.to_string();
        }

        let spans = self.protected_spans(text);
        let mut protected = spans.cursor();
        let mut digits_seen = 0usize;
        let mut out = String::with_capacity(text.len());

        for (offset, ch) in text.char_indices() {
            if protected.is_protected(offset) {
                out.push(ch);
                continue;
            }

            let drop = match CharClass::from_char(ch) {
                CharClass::Digit if self.remove_digits => {
                    digits_seen += 1;
                    digits_seen > self.keep_num
                }
                CharClass::Punctuation => self.remove_punctuation,
                _ => false,
            };

            if !drop {
                out.push(ch);
            }
        }

        out
    }
}
