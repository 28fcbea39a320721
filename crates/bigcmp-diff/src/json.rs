//! JSON rendering of a whole comparison.
//!
//! Unlike [`ReportWriter`](crate::ReportWriter) this collects every record
//! before writing, since a JSON document cannot be emitted piecemeal.

use std::io::Write;

use serde::Serialize;

use bigcmp_index::Lines;

use crate::error::{DiffError, DiffResult};
use crate::record::{ChangeRecord, LineRange};
use crate::stats::DiffStats;

/// One record together with the text of the lines it covers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsonChange {
    #[serde(flatten)]
    pub record: ChangeRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub old_lines: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub new_lines: Vec<String>,
}

/// Complete comparison result as a serializable document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct JsonReport {
    pub old: String,
    pub new: String,
    pub identical: bool,
    pub changes: Vec<JsonChange>,
    pub stats: DiffStats,
}

impl JsonReport {
    /// Drain `records` into a report. Line text is decoded lossily.
    pub fn collect<I>(
        old: Lines<'_>,
        old_label: &str,
        new: Lines<'_>,
        new_label: &str,
        records: I,
    ) -> Self
    where
        I: IntoIterator<Item = ChangeRecord>,
    {
        let mut stats = DiffStats::default();
        let changes: Vec<JsonChange> = records
            .into_iter()
            .map(|record| {
                stats.record(&record);
                JsonChange {
                    record,
                    old_lines: texts(&old, record.old_range()),
                    new_lines: texts(&new, record.new_range()),
                }
            })
            .collect();

        Self {
            old: old_label.to_string(),
            new: new_label.to_string(),
            identical: changes.is_empty(),
            changes,
            stats,
        }
    }

    /// Write the report as pretty-printed JSON followed by a newline.
    pub fn write_to<W: Write>(&self, mut out: W) -> DiffResult<()> {
        serde_json::to_writer_pretty(&mut out, self)
            .map_err(|e| DiffError::Serialization(e.to_string()))?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

fn texts(lines: &Lines<'_>, range: Option<LineRange>) -> Vec<String> {
    range
        .map(|range| {
            range
                .indices()
                .map(|i| String::from_utf8_lossy(lines.text(i)).into_owned())
                .collect()
        })
        .unwrap_or_default()
}
