//! Sequential synchronising differ (engine A).
//!
//! Walks both files in a single pass. Matching lines advance both cursors;
//! on a mismatch the engine looks ahead in each file for the stalled line of
//! the other and uses whichever side resynchronises sooner to size the
//! reported block.
//!
//! The heuristic is greedy and never backtracks, so it can report a larger
//! diff than necessary when several resynchronisation points exist. It will
//! resynchronise on any matching line, blank lines included.
//!
//! # Resynchronisation policy
//!
//! With the cursor at `(a, b)` and old line `a` differing from new line `b`:
//!
//! | old line `a` seen later in new | new line `b` seen later in old | record |
//! |---|---|---|
//! | no | no | replace `a` by `b` |
//! | no | yes | delete `a` |
//! | yes | no | insert `b` |
//! | at gap `g_new` | at gap `g_old < g_new` | delete `a..a+g_old` |
//! | at gap `g_new < g_old` | at gap `g_old` | insert `b..b+g_new` |
//! | at gap `g` | at gap `g` | replace `a` by `b` |

use tracing::{debug, trace};

use bigcmp_index::Lines;

use crate::matcher::LineMatcher;
use crate::record::ChangeRecord;

/// Tuning for the sequential engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequentialOptions {
    /// Look at most this many lines past the cursor when resynchronising.
    ///
    /// `None` scans to the end of the file. A bound caps the cost of each
    /// mismatch on huge inputs but changes which blocks are reported.
    pub max_gap: Option<usize>,
}

/// Lines of each file accounted for so far (0-based, exclusive).
///
/// Neither index ever decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub old: usize,
    pub new: usize,
}

/// Lazy stream of change records from the sequential engine.
///
/// Single-use: once drained it keeps returning `None`.
#[derive(Debug)]
pub struct SequentialDiff<'a, M> {
    old: Lines<'a>,
    new: Lines<'a>,
    matcher: M,
    options: SequentialOptions,
    cursor: Cursor,
}

impl<'a, M: LineMatcher> SequentialDiff<'a, M> {
    /// Prepare a comparison of `old` against `new`.
    pub fn new(old: Lines<'a>, new: Lines<'a>, matcher: M, options: SequentialOptions) -> Self {
        debug!(
            old_lines = old.len(),
            new_lines = new.len(),
            max_gap = ?options.max_gap,
            "sequential diff"
        );
        Self {
            old,
            new,
            matcher,
            options,
            cursor: Cursor::default(),
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns `true` once both files are fully accounted for.
    pub fn is_drained(&self) -> bool {
        self.cursor.old >= self.old.len() && self.cursor.new >= self.new.len()
    }

    /// Decide the record for a mismatch at `(a, b)` and advance past it.
    fn resync(&mut self, a: usize, b: usize) -> ChangeRecord {
        // Distance to old line `a` further down the new file, and to new
        // line `b` further down the old file.
        let new_gap = self.scan_new(a, b);
        let old_gap = self.scan_old(a, b);

        let record = match (old_gap, new_gap) {
            (Some(old_gap), Some(new_gap)) if old_gap < new_gap => {
                self.cursor.old += old_gap;
                ChangeRecord::deletion(a..a + old_gap)
            }
            (Some(old_gap), Some(new_gap)) if new_gap < old_gap => {
                self.cursor.new += new_gap;
                ChangeRecord::insertion(b..b + new_gap)
            }
            (Some(_), None) => {
                self.cursor.old += 1;
                ChangeRecord::deletion(a..a + 1)
            }
            (None, Some(_)) => {
                self.cursor.new += 1;
                ChangeRecord::insertion(b..b + 1)
            }
            // Neither side resynchronises, or both do at the same distance.
            _ => {
                self.cursor.old += 1;
                self.cursor.new += 1;
                ChangeRecord::replacement(a, b)
            }
        };
        trace!(?old_gap, ?new_gap, %record, "resynchronised");
        record
    }

    fn scan_new(&self, a: usize, b: usize) -> Option<usize> {
        let end = self.scan_end(b, self.new.len());
        (b + 1..end)
            .find(|&j| self.matcher.matches(&self.old, a, &self.new, j))
            .map(|j| j - b)
    }

    fn scan_old(&self, a: usize, b: usize) -> Option<usize> {
        let end = self.scan_end(a, self.old.len());
        (a + 1..end)
            .find(|&i| self.matcher.matches(&self.old, i, &self.new, b))
            .map(|i| i - a)
    }

    fn scan_end(&self, from: usize, len: usize) -> usize {
        match self.options.max_gap {
            Some(gap) => len.min(from.saturating_add(gap).saturating_add(1)),
            None => len,
        }
    }
}

impl<M: LineMatcher> Iterator for SequentialDiff<'_, M> {
    type Item = ChangeRecord;

    fn next(&mut self) -> Option<ChangeRecord> {
        let (old_len, new_len) = (self.old.len(), self.new.len());
        loop {
            let Cursor { old: a, new: b } = self.cursor;
            match (a >= old_len, b >= new_len) {
                (true, true) => return None,
                (true, false) => {
                    self.cursor.new = new_len;
                    return Some(ChangeRecord::insertion(b..new_len));
                }
                (false, true) => {
                    self.cursor.old = old_len;
                    return Some(ChangeRecord::deletion(a..old_len));
                }
                (false, false) => {}
            }

            if self.matcher.matches(&self.old, a, &self.new, b) {
                self.cursor.old += 1;
                self.cursor.new += 1;
                continue;
            }
            return Some(self.resync(a, b));
        }
    }
}
