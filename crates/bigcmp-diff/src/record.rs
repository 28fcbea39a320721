//! Change records and the line ranges they cover.

use std::fmt;
use std::ops::Range;

use serde::Serialize;

/// Which of the two compared files a line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The first file ("old", file A).
    Old,
    /// The second file ("new", file B).
    New,
}

/// Inclusive, 1-based line interval used for display.
///
/// Never empty: `first <= last` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    first: usize,
    last: usize,
}

impl LineRange {
    /// Convert a non-empty 0-based half-open index range.
    pub fn from_indices(indices: Range<usize>) -> Self {
        debug_assert!(indices.start < indices.end, "empty line range {indices:?}");
        Self {
            first: indices.start + 1,
            last: indices.end,
        }
    }

    /// The range covering only the 0-based line `index`.
    pub fn single(index: usize) -> Self {
        Self::from_indices(index..index + 1)
    }

    /// First line number (1-based).
    pub fn first(&self) -> usize {
        self.first
    }

    /// Last line number (1-based, inclusive).
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of lines covered.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Line ranges are never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The covered lines as 0-based indices.
    pub fn indices(&self) -> Range<usize> {
        self.first - 1..self.last
    }

    /// Line numbers in order.
    pub fn numbers(&self) -> impl Iterator<Item = usize> {
        self.first..=self.last
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.first == self.last {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}-{}", self.first, self.last)
        }
    }
}

/// One reported block of difference.
///
/// Matched lines are never reported. A `Replacement` always covers exactly
/// one line on each side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ChangeRecord {
    /// Lines present only in the old file.
    Deletion { old: LineRange },
    /// Lines present only in the new file.
    Insertion { new: LineRange },
    /// One old line standing in for one new line.
    Replacement { old: LineRange, new: LineRange },
}

impl ChangeRecord {
    /// Deletion of the old lines at 0-based `indices`.
    pub fn deletion(indices: Range<usize>) -> Self {
        Self::Deletion {
            old: LineRange::from_indices(indices),
        }
    }

    /// Insertion of the new lines at 0-based `indices`.
    pub fn insertion(indices: Range<usize>) -> Self {
        Self::Insertion {
            new: LineRange::from_indices(indices),
        }
    }

    /// Replacement of old line `old_index` by new line `new_index` (0-based).
    pub fn replacement(old_index: usize, new_index: usize) -> Self {
        Self::Replacement {
            old: LineRange::single(old_index),
            new: LineRange::single(new_index),
        }
    }

    /// Old-file lines covered by this record.
    pub fn old_range(&self) -> Option<LineRange> {
        match *self {
            Self::Deletion { old } | Self::Replacement { old, .. } => Some(old),
            Self::Insertion { .. } => None,
        }
    }

    /// New-file lines covered by this record.
    pub fn new_range(&self) -> Option<LineRange> {
        match *self {
            Self::Insertion { new } | Self::Replacement { new, .. } => Some(new),
            Self::Deletion { .. } => None,
        }
    }

    /// The side and range of a single-sided record; `None` for a replacement.
    pub fn single_side(&self) -> Option<(Side, LineRange)> {
        match *self {
            Self::Deletion { old } => Some((Side::Old, old)),
            Self::Insertion { new } => Some((Side::New, new)),
            Self::Replacement { .. } => None,
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deletion { old } => write!(f, "delete old {old}"),
            Self::Insertion { new } => write!(f, "insert new {new}"),
            Self::Replacement { old, new } => write!(f, "replace old {old} with new {new}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_from_indices_is_one_based_inclusive() {
        let range = LineRange::from_indices(2..5);
        assert_eq!(range.first(), 3);
        assert_eq!(range.last(), 5);
        assert_eq!(range.len(), 3);
        assert_eq!(range.indices(), 2..5);
        assert_eq!(range.numbers().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn range_display() {
        assert_eq!(LineRange::single(0).to_string(), "1");
        assert_eq!(LineRange::from_indices(9..12).to_string(), "10-12");
    }

    #[test]
    fn record_sides() {
        let deletion = ChangeRecord::deletion(0..2);
        assert_eq!(deletion.old_range(), Some(LineRange::from_indices(0..2)));
        assert_eq!(deletion.new_range(), None);
        assert_eq!(
            deletion.single_side(),
            Some((Side::Old, LineRange::from_indices(0..2)))
        );

        let insertion = ChangeRecord::insertion(4..5);
        assert_eq!(insertion.old_range(), None);
        assert_eq!(insertion.single_side().map(|(side, _)| side), Some(Side::New));

        let replacement = ChangeRecord::replacement(3, 7);
        assert_eq!(replacement.old_range(), Some(LineRange::single(3)));
        assert_eq!(replacement.new_range(), Some(LineRange::single(7)));
        assert_eq!(replacement.single_side(), None);
    }

    #[test]
    fn record_display() {
        assert_eq!(ChangeRecord::deletion(0..3).to_string(), "delete old 1-3");
        assert_eq!(
            ChangeRecord::replacement(1, 1).to_string(),
            "replace old 2 with new 2"
        );
    }

    #[test]
    fn record_serializes_with_kind_tag() {
        let json = serde_json::to_value(ChangeRecord::insertion(1..3)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "kind": "insertion", "new": { "first": 2, "last": 3 } })
        );
    }
}
