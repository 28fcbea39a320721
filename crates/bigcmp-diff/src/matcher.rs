//! Line equality, shared by both engines.

use bigcmp_index::Lines;

/// Decides whether an old line and a new line are the same line.
pub trait LineMatcher {
    /// Compare old line `old_index` with new line `new_index` (0-based).
    fn matches(
        &self,
        old: &Lines<'_>,
        old_index: usize,
        new: &Lines<'_>,
        new_index: usize,
    ) -> bool;
}

impl<M: LineMatcher + ?Sized> LineMatcher for &M {
    fn matches(
        &self,
        old: &Lines<'_>,
        old_index: usize,
        new: &Lines<'_>,
        new_index: usize,
    ) -> bool {
        (**self).matches(old, old_index, new, new_index)
    }
}

/// Byte-exact comparison with no normalisation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactMatcher;

impl LineMatcher for ExactMatcher {
    fn matches(
        &self,
        old: &Lines<'_>,
        old_index: usize,
        new: &Lines<'_>,
        new_index: usize,
    ) -> bool {
        lines_equal(old, old_index, new, new_index)
    }
}

/// Byte-exact line equality.
///
/// Span lengths are compared first so most mismatches never touch the line
/// contents. The terminator is part of the span: a final line lacking `\n`
/// never equals the same text with one.
pub fn lines_equal(old: &Lines<'_>, old_index: usize, new: &Lines<'_>, new_index: usize) -> bool {
    if old.span(old_index).len() != new.span(new_index).len() {
        return false;
    }
    old.line(old_index) == new.line(new_index)
}
