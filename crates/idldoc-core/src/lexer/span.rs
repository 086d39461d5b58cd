//! Byte ranges inside a single type expression

use std::ops::Range;

/// Where a token sits in the declared type text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// 1-based column of the first byte, as shown in diagnostics
    #[must_use]
    pub const fn column(&self) -> usize {
        self.start + 1
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
