use std::ops::Range;

use crate::error::{IndexError, IndexResult};

/// Half-open byte range `[start, end)` of one line within a buffer.
///
/// Includes the trailing `\n` when the line has one. Spans can only be
/// constructed against a known buffer length, so a span never escapes its
/// buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a span, checking it lies within a buffer of `buffer_len` bytes.
    pub fn new(start: usize, end: usize, buffer_len: usize) -> IndexResult<Self> {
        if start > end || end > buffer_len {
            return Err(IndexError::SpanOutOfBounds {
                start,
                end,
                len: buffer_len,
            });
        }
        Ok(Self { start, end })
    }

    /// First byte offset.
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last byte offset.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes, terminator included.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-length span.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a slice range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}
