/// Errors from building or viewing a line table.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The span table for a buffer could not be allocated.
    #[error("insufficient memory to index {lines} lines")]
    Allocation { lines: usize },

    /// A span would reach outside its buffer.
    #[error("span {start}..{end} out of bounds for buffer of {len} bytes")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// A table was paired with a buffer it was not built from.
    #[error("line table covers {table} bytes but buffer has {buffer}")]
    LengthMismatch { table: usize, buffer: usize },
}

/// Result alias for indexing operations.
pub type IndexResult<T> = Result<T, IndexError>;
