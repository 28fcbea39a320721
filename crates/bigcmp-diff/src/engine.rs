//! Engine selection: runs exactly one differ per comparison.

use serde::{Deserialize, Serialize};

use bigcmp_index::Lines;

use crate::block::BlockDiff;
use crate::matcher::LineMatcher;
use crate::record::ChangeRecord;
use crate::sequential::{SequentialDiff, SequentialOptions};

/// Which difference engine to run. Exactly one is used per comparison.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// Single-pass synchronising heuristic, for huge files.
    #[default]
    Sequential,
    /// Longest-common-block search, for moderate files.
    Block,
}

impl Engine {
    /// Lowercase name as used in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Block => "block",
        }
    }
}

/// Records from whichever engine was selected.
#[derive(Debug)]
pub enum Changes<'a, M> {
    Sequential(SequentialDiff<'a, M>),
    Block(BlockDiff<'a, M>),
}

impl<M: LineMatcher> Iterator for Changes<'_, M> {
    type Item = ChangeRecord;

    fn next(&mut self) -> Option<ChangeRecord> {
        match self {
            Self::Sequential(diff) => diff.next(),
            Self::Block(diff) => diff.next(),
        }
    }
}

/// Compare `old` with `new` using `engine`.
///
/// `options` only affect the sequential engine.
pub fn diff_lines<'a, M: LineMatcher>(
    engine: Engine,
    old: Lines<'a>,
    new: Lines<'a>,
    matcher: M,
    options: SequentialOptions,
) -> Changes<'a, M> {
    match engine {
        Engine::Sequential => Changes::Sequential(SequentialDiff::new(old, new, matcher, options)),
        Engine::Block => Changes::Block(BlockDiff::new(old, new, matcher)),
    }
}
