//! Recursive common-block differ (engine B).
//!
//! Finds the longest run of lines shared by both ranges, then handles the
//! ranges before and after that run the same way. The shared run itself is
//! common context and is never reported. When no line is shared at all, the
//! first line of each range is reported as a replacement and the search
//! continues one line further on.
//!
//! The search only considers runs that start at the beginning of at least
//! one of the two ranges. For a given length it slides over every offset of
//! the old range first (against the start of the new range), then every
//! offset of the new range (against the start of the old range); the first
//! hit wins, not the centred one. Cost grows polynomially with range size, so
//! this engine is meant for moderate inputs only.
//!
//! The divide-and-conquer is driven by an explicit work stack rather than
//! native recursion, so deeply alternating inputs cannot exhaust the call
//! stack. Pending ranges are pushed "after" first and "before" second, which
//! preserves left-to-right emission.

use std::ops::Range;

use tracing::{debug, trace};

use bigcmp_index::Lines;

use crate::matcher::LineMatcher;
use crate::record::ChangeRecord;

/// A common block: `len` lines starting at `old_start` and `new_start`,
/// offsets relative to the searched ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchWindow {
    pub len: usize,
    pub old_start: usize,
    pub new_start: usize,
}

/// Pair of index ranges still to be compared.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Pending {
    old: Range<usize>,
    new: Range<usize>,
}

/// Lazy stream of change records from the common-block engine.
#[derive(Debug)]
pub struct BlockDiff<'a, M> {
    old: Lines<'a>,
    new: Lines<'a>,
    matcher: M,
    stack: Vec<Pending>,
}

impl<'a, M: LineMatcher> BlockDiff<'a, M> {
    /// Prepare a comparison of `old` against `new`.
    pub fn new(old: Lines<'a>, new: Lines<'a>, matcher: M) -> Self {
        debug!(old_lines = old.len(), new_lines = new.len(), "block diff");
        let stack = vec![Pending {
            old: 0..old.len(),
            new: 0..new.len(),
        }];
        Self {
            old,
            new,
            matcher,
            stack,
        }
    }

    /// Number of range pairs waiting to be compared.
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl<M: LineMatcher> BlockDiff<'_, M> {
    /// Work off the top pending pair. `None` once the stack is empty,
    /// `Some(None)` when the pair was split without emitting a record.
    fn step(&mut self) -> Option<Option<ChangeRecord>> {
        let Pending { old, new } = self.stack.pop()?;
        match (old.is_empty(), new.is_empty()) {
            (true, true) => return Some(None),
            (true, false) => return Some(Some(ChangeRecord::insertion(new))),
            (false, true) => return Some(Some(ChangeRecord::deletion(old))),
            (false, false) => {}
        }

        match find_common_block(&self.old, old.clone(), &self.new, new.clone(), &self.matcher) {
            Some(window) => {
                let old_match = old.start + window.old_start;
                let new_match = new.start + window.new_start;
                trace!(
                    len = window.len,
                    old_line = old_match + 1,
                    new_line = new_match + 1,
                    "common block"
                );
                self.stack.push(Pending {
                    old: old_match + window.len..old.end,
                    new: new_match + window.len..new.end,
                });
                self.stack.push(Pending {
                    old: old.start..old_match,
                    new: new.start..new_match,
                });
                Some(None)
            }
            None => {
                self.stack.push(Pending {
                    old: old.start + 1..old.end,
                    new: new.start + 1..new.end,
                });
                Some(Some(ChangeRecord::replacement(old.start, new.start)))
            }
        }
    }
}

impl<M: LineMatcher> Iterator for BlockDiff<'_, M> {
    type Item = ChangeRecord;

    fn next(&mut self) -> Option<ChangeRecord> {
        loop {
            if let Some(record) = self.step()? {
                return Some(record);
            }
        }
    }
}

/// Search `old` and `new` for the longest common block anchored at the start
/// of either range.
///
/// Lengths are tried from `min(|old|, |new|)` down to 1. For each length,
/// old offsets are tried in increasing order against the start of `new`,
/// then new offsets against the start of `old`.
pub fn find_common_block<M: LineMatcher + ?Sized>(
    old_lines: &Lines<'_>,
    old: Range<usize>,
    new_lines: &Lines<'_>,
    new: Range<usize>,
    matcher: &M,
) -> Option<MatchWindow> {
    let window_matches = |old_at: usize, new_at: usize, len: usize| {
        (0..len).all(|k| matcher.matches(old_lines, old_at + k, new_lines, new_at + k))
    };

    let longest = old.len().min(new.len());
    (1..=longest).rev().find_map(|len| {
        (0..=old.len() - len)
            .find(|&offset| window_matches(old.start + offset, new.start, len))
            .map(|offset| MatchWindow {
                len,
                old_start: offset,
                new_start: 0,
            })
            .or_else(|| {
                (0..=new.len() - len)
                    .find(|&offset| window_matches(old.start, new.start + offset, len))
                    .map(|offset| MatchWindow {
                        len,
                        old_start: 0,
                        new_start: offset,
                    })
            })
    })
}
