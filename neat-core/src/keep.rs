//! Literal substrings shielded from removal
//!
//! Matching is plain substring comparison. When several entries match at the
//! same position the longest one wins, and scanning resumes after it
//! (leftmost-longest, non-overlapping).

use crate::error::{CoreError, Result};
use crate::span::{Span, SpanSet};

/// Set of literal substrings to protect
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeepSet {
    /// Sorted longest first, ties broken lexicographically
    entries: Vec<String>,
}

impl KeepSet {
    /// Build a keep set, rejecting empty entries
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.iter().any(String::is_empty) {
            return Err(CoreError::invalid(
                "keep",
                "entries must be non-empty strings",
            ));
        }

        entries.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        entries.dedup();

        Ok(Self { entries })
    }

    /// An empty keep set
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when no substring is protected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in matching priority order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Longest entry matching at the start of `text`
    fn longest_prefix(&self, text: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(String::as_str)
            .find(|entry| text.starts_with(entry))
    }

    /// Compute the protected spans of `text`
    pub fn protected_spans(&self, text: &str) -> SpanSet {
        let mut spans = SpanSet::new();
        if self.entries.is_empty() {
            return spans;
        }

        let mut pos = 0;
        while let Some(ch) = text[pos..].chars().next() {
            match self.longest_prefix(&text[pos..]) {
                Some(entry) => {
                    spans.push(Span::new(pos, pos + entry.len()));
                    pos += entry.len();
                }
                None => pos += ch.len_utf8(),
            }
        }

        spans
    }
}
