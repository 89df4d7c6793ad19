//! Section page ranges.

use std::fmt;

/// An inclusive, 1-based page range.
///
/// `end == None` means the range is open-ended and runs to the last page of
/// the document; it is resolved with [`PageRange::resolve`] once the page
/// count is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRange {
    /// First page (1-based).
    pub start: usize,
    /// Last page (1-based, inclusive), or `None` for "to the end".
    pub end: Option<usize>,
}

impl PageRange {
    /// A closed range `start..=end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// An open-ended range starting at `start`.
    pub const fn open(start: usize) -> Self {
        Self { start, end: None }
    }

    /// Whether the range runs to the end of the document.
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// The concrete last page, substituting `page_count` for an open end.
    pub fn resolve(&self, page_count: usize) -> usize {
        self.end.unwrap_or(page_count)
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}-{end}", self.start),
            None => write!(f, "{}-end", self.start),
        }
    }
}
