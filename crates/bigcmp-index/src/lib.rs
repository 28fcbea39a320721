//! Line indexing for bigcmp.
//!
//! Splits a borrowed byte buffer into an ordered table of line spans. The
//! table is built once per file and never mutated; the difference engines
//! read lines through the [`Lines`] view, which pairs a table with the bytes
//! it was built from.
//!
//! # Key Types
//!
//! - [`Span`] -- half-open byte range of one line, terminator included
//! - [`LineTable`] -- every span of one buffer, in order
//! - [`Lines`] -- borrowed view yielding line bytes by index

pub mod error;
pub mod span;
pub mod table;

pub use error::{IndexError, IndexResult};
pub use span::Span;
pub use table::{LineTable, Lines};
