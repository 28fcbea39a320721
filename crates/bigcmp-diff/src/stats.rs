//! Running totals over emitted change records.

use serde::Serialize;

use crate::record::ChangeRecord;

/// Totals for one comparison, accumulated as records stream past.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    /// Number of records emitted.
    pub records: usize,
    /// Old lines reported by deletions.
    pub deleted: usize,
    /// New lines reported by insertions.
    pub inserted: usize,
    /// Replacement records (one line on each side).
    pub replaced: usize,
}

impl DiffStats {
    /// Add one record to the totals.
    pub fn record(&mut self, record: &ChangeRecord) {
        self.records += 1;
        match record {
            ChangeRecord::Deletion { old } => self.deleted += old.len(),
            ChangeRecord::Insertion { new } => self.inserted += new.len(),
            ChangeRecord::Replacement { .. } => self.replaced += 1,
        }
    }

    /// Returns `true` if no record was seen.
    pub fn is_identical(&self) -> bool {
        self.records == 0
    }

    /// Old lines reported in total (deletions plus replacements).
    pub fn old_lines_changed(&self) -> usize {
        self.deleted + self.replaced
    }

    /// New lines reported in total (insertions plus replacements).
    pub fn new_lines_changed(&self) -> usize {
        self.inserted + self.replaced
    }
}

impl<'r> FromIterator<&'r ChangeRecord> for DiffStats {
    fn from_iter<I: IntoIterator<Item = &'r ChangeRecord>>(iter: I) -> Self {
        let mut stats = Self::default();
        for record in iter {
            stats.record(record);
        }
        stats
    }
}
