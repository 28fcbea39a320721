//! Line difference engines for bigcmp.
//!
//! Two alternative strategies compare a pair of indexed files and stream
//! [`ChangeRecord`]s in file order:
//!
//! - [`SequentialDiff`] -- single-pass heuristic that resynchronises after
//!   each mismatch. Linear in practice and suited to huge files with small,
//!   localised edits.
//! - [`BlockDiff`] -- divide-and-conquer search for the longest common block.
//!   Produces smaller diffs on moderate inputs at a high polynomial cost.
//!
//! Both engines define line equality through a [`LineMatcher`]; the
//! [`ExactMatcher`] compares raw bytes with no normalisation. Records are
//! rendered by [`ReportWriter`] (text) or [`JsonReport`].
//!
//! # Key Types
//!
//! - [`ChangeRecord`] / [`LineRange`] / [`Side`] -- one reported block
//! - [`Engine`] / [`diff_lines`] -- engine selection
//! - [`DiffStats`] -- counters accumulated while streaming

pub mod block;
pub mod engine;
pub mod error;
pub mod json;
pub mod matcher;
pub mod record;
pub mod report;
pub mod sequential;
pub mod stats;

#[cfg(test)]
pub(crate) mod fixture;

pub use block::{find_common_block, BlockDiff, MatchWindow};
pub use engine::{diff_lines, Changes, Engine};
pub use error::{DiffError, DiffResult};
pub use json::JsonReport;
pub use matcher::{lines_equal, ExactMatcher, LineMatcher};
pub use record::{ChangeRecord, LineRange, Side};
pub use report::{ReportStyle, ReportWriter, DEFAULT_SEPARATOR};
pub use sequential::{Cursor, SequentialDiff, SequentialOptions};
pub use stats::DiffStats;
