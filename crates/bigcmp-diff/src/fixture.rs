//! Test helpers: owned buffers with their line tables.

use bigcmp_index::{LineTable, Lines};

use crate::matcher::{ExactMatcher, LineMatcher};
use crate::record::ChangeRecord;

pub(crate) struct Fixture {
    bytes: Vec<u8>,
    table: LineTable,
}

impl Fixture {
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            table: LineTable::build(bytes).unwrap(),
        }
    }

    pub(crate) fn lines(&self) -> Lines<'_> {
        self.table.view(&self.bytes).unwrap()
    }
}

/// A buffer holding each entry as one `\n`-terminated line.
pub(crate) fn file(lines: &[&str]) -> Fixture {
    let text: String = lines.iter().map(|l| format!("{l}\n")).collect();
    Fixture::from_bytes(text.as_bytes())
}

/// Check that `records` account for every line of both files exactly once.
///
/// Reported line numbers must be strictly increasing and in range on each
/// side, and the lines left unreported must pair up one-to-one, in order,
/// with each pair matching.
pub(crate) fn assert_accounts_for_all_lines(
    old: &Lines<'_>,
    new: &Lines<'_>,
    records: &[ChangeRecord],
) {
    let mut old_reported = Vec::new();
    let mut new_reported = Vec::new();
    for record in records {
        if let Some(range) = record.old_range() {
            old_reported.extend(range.indices());
        }
        if let Some(range) = record.new_range() {
            new_reported.extend(range.indices());
        }
    }
    assert!(old_reported.windows(2).all(|w| w[0] < w[1]), "{records:?}");
    assert!(new_reported.windows(2).all(|w| w[0] < w[1]), "{records:?}");
    assert!(old_reported.iter().all(|&i| i < old.len()));
    assert!(new_reported.iter().all(|&i| i < new.len()));

    let old_kept: Vec<usize> = (0..old.len()).filter(|i| !old_reported.contains(i)).collect();
    let new_kept: Vec<usize> = (0..new.len()).filter(|i| !new_reported.contains(i)).collect();
    assert_eq!(old_kept.len(), new_kept.len(), "{records:?}");
    for (&i, &j) in old_kept.iter().zip(&new_kept) {
        assert!(
            ExactMatcher.matches(old, i, new, j),
            "unreported lines {} and {} differ: {records:?}",
            i + 1,
            j + 1
        );
    }
}
