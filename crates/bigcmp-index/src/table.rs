//! Line tables and the borrowed [`Lines`] view.
//!
//! # Invariants
//!
//! - Spans are contiguous and non-overlapping.
//! - The first span starts at offset 0 and the last ends at the buffer length.
//! - There is one span per newline byte plus one, except for the empty
//!   buffer, which has no spans.
//!
//! A buffer ending in `\n` therefore has an empty final span. That span holds
//! no content and is excluded from [`LineTable::line_count`], the number of
//! lines the engines compare and report.

use tracing::debug;

use crate::error::{IndexError, IndexResult};
use crate::span::Span;

/// Ordered spans of every line in one buffer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineTable {
    spans: Vec<Span>,
    byte_len: usize,
}

impl LineTable {
    /// Index `bytes` into line spans.
    ///
    /// The span vector is reserved up front for the exact line count; a
    /// failed reservation is reported rather than aborting the process.
    pub fn build(bytes: &[u8]) -> IndexResult<Self> {
        let len = bytes.len();
        if len == 0 {
            return Ok(Self::default());
        }

        let count = bytes.iter().filter(|&&b| b == b'\n').count() + 1;
        let mut spans = Vec::new();
        spans
            .try_reserve_exact(count)
            .map_err(|_| IndexError::Allocation { lines: count })?;

        let mut start = 0;
        for (pos, _) in bytes.iter().enumerate().filter(|&(_, &b)| b == b'\n') {
            spans.push(Span::new(start, pos + 1, len)?);
            start = pos + 1;
        }
        spans.push(Span::new(start, len, len)?);

        debug!(bytes = len, spans = spans.len(), "built line table");
        Ok(Self {
            spans,
            byte_len: len,
        })
    }

    /// Number of spans, including an empty final span.
    pub fn span_count(&self) -> usize {
        self.spans.len()
    }

    /// Number of comparable lines.
    pub fn line_count(&self) -> usize {
        match self.spans.last() {
            Some(last) if last.is_empty() => self.spans.len() - 1,
            _ => self.spans.len(),
        }
    }

    /// Length of the buffer this table was built from.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// All spans in order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The span at `index`, if any.
    pub fn span(&self, index: usize) -> Option<Span> {
        self.spans.get(index).copied()
    }

    /// Pair this table with the bytes it indexes.
    pub fn view<'a>(&'a self, bytes: &'a [u8]) -> IndexResult<Lines<'a>> {
        if bytes.len() != self.byte_len {
            return Err(IndexError::LengthMismatch {
                table: self.byte_len,
                buffer: bytes.len(),
            });
        }
        Ok(Lines { bytes, table: self })
    }
}

/// Read-only view of one file's lines.
///
/// Indices are 0-based and must be below [`Lines::len`].
#[derive(Clone, Copy, Debug)]
pub struct Lines<'a> {
    bytes: &'a [u8],
    table: &'a LineTable,
}

impl<'a> Lines<'a> {
    /// Number of comparable lines.
    pub fn len(&self) -> usize {
        self.table.line_count()
    }

    /// Returns `true` if there are no comparable lines.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Span of line `index`.
    pub fn span(&self, index: usize) -> Span {
        self.table.spans[index]
    }

    /// Raw bytes of line `index`, terminator included.
    pub fn line(&self, index: usize) -> &'a [u8] {
        &self.bytes[self.table.spans[index].range()]
    }

    /// Bytes of line `index` without its `\n` terminator.
    pub fn text(&self, index: usize) -> &'a [u8] {
        let line = self.line(index);
        line.strip_suffix(b"\n").unwrap_or(line)
    }
}
