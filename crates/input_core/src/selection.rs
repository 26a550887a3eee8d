//! Text selection representation.

use crate::error::SelectionError;
use crate::text::non_whitespace_chars;

/// Represents a text selection as a byte range.
///
/// The range is always normalized such that `start <= end`. Ranges built
/// with [`SelectionRange::try_new`] are additionally known to lie inside the
/// text and on character boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    /// Start byte offset of the selection (inclusive).
    pub start: usize,
    /// End byte offset of the selection (exclusive).
    pub end: usize,
}

impl SelectionRange {
    /// Create a new selection range.
    ///
    /// The range is automatically normalized so `start <= end`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a range over `text` from a host's anchor/focus offsets.
    ///
    /// Backward selections are normalized; offsets past the end or inside a
    /// multi-byte character are rejected.
    pub fn try_new(anchor: usize, focus: usize, text: &str) -> Result<Self, SelectionError> {
        let range = Self::new(anchor, focus);
        if range.end > text.len() {
            return Err(SelectionError::OutOfRange {
                start: range.start,
                end: range.end,
                len: text.len(),
            });
        }
        for offset in [range.start, range.end] {
            if !text.is_char_boundary(offset) {
                return Err(SelectionError::NotCharBoundary { offset });
            }
        }
        Ok(range)
    }

    /// Returns `true` if the selection is empty (zero-width).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the selection in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selected substring from the given value.
    ///
    /// # Panics
    ///
    /// Panics if `start` or `end` are out of bounds or not on character boundaries.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> &'a str {
        &value[self.start..self.end]
    }

    /// Number of non-whitespace characters selected in `value`.
    pub fn meaningful_chars(&self, value: &str) -> usize {
        value
            .get(self.start..self.end)
            .map(non_whitespace_chars)
            .unwrap_or(0)
    }
}
