//! Protected byte ranges within a single string

use smallvec::SmallVec;
use std::ops::Range;

/// Half-open byte range `[start, end)` that removal rules must not touch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset of the first protected byte
    pub start: usize,
    /// Byte offset one past the last protected byte
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} is past end {end}");
        Self { start, end }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the span covers no bytes
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` falls inside this span
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }

    /// The span as a range usable for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Ordered, non-overlapping set of protected spans for one string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpanSet {
    spans: SmallVec<[Span; 4]>,
}

impl SpanSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a span. Spans must be pushed in increasing, non-overlapping order.
    pub fn push(&mut self, span: Span) {
        debug_assert!(
            self.spans.last().map_or(true, |last| last.end <= span.start),
            "spans must be pushed in order without overlap"
        );
        if !span.is_empty() {
            self.spans.push(span);
        }
    }

    /// Number of spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True when nothing is protected
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate over the spans in order
    pub fn iter(&self) -> impl Iterator<Item = &Span> {
        self.spans.iter()
    }

    /// Whether `offset` lies in any span
    pub fn contains(&self, offset: usize) -> bool {
        // binary search on the sorted starts
        match self.spans.binary_search_by(|s| s.start.cmp(&offset)) {
            Ok(_) => true,
            Err(0) => false,
            Err(idx) => self.spans[idx - 1].contains(offset),
        }
    }

    /// Cursor for answering membership queries with monotonically increasing offsets
    pub fn cursor(&self) -> SpanCursor<'_> {
        SpanCursor {
            spans: &self.spans,
            next: 0,
        }
    }
}

/// Linear-time membership checks for a left-to-right scan
#[derive(Debug)]
pub struct SpanCursor<'a> {
    spans: &'a [Span],
    next: usize,
}

impl SpanCursor<'_> {
    /// Whether `offset` is protected. Offsets must not decrease between calls.
    pub fn is_protected(&mut self, offset: usize) -> bool {
        while let Some(span) = self.spans.get(self.next) {
            if offset < span.end {
                return span.start <= offset;
            }
            self.next += 1;
        }
        false
    }
}
