//! File acquisition for bigcmp.
//!
//! Supplies each input file as an immutable, contiguous [`ByteBuffer`]. The
//! comparison core only ever borrows the bytes; the buffer owns them (or the
//! memory mapping) until it is dropped, after all output referencing it has
//! been written.
//!
//! # Acquisition Modes
//!
//! - [`AcquireMode::Auto`] -- memory-map, falling back to a full read when
//!   the file cannot be mapped (pipes, some network filesystems)
//! - [`AcquireMode::Map`] -- memory-map only; mapping failure is an error
//! - [`AcquireMode::Read`] -- read the whole file into memory
//!
//! Zero-length files are never mapped; they yield an empty buffer, which is
//! distinct from a failed acquisition.

pub mod buffer;
pub mod error;

pub use buffer::{AcquireMode, Backing, ByteBuffer};
pub use error::{StoreError, StoreResult};
