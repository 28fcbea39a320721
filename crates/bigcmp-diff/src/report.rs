//! Text rendering of change records.
//!
//! Every reported line is printed as
//!
//! ```text
//! "<label>", <line number>: <line text>
//! ```
//!
//! with blocks delimited by a separator line. A record that continues the
//! previous one (same single side, first line directly after the previous
//! record's last line) is not preceded by a separator, so runs of
//! single-line edits read as one block. After the last record a trailing
//! separator is written.

use std::io::{self, Write};

use bigcmp_index::Lines;

use crate::record::{ChangeRecord, LineRange, Side};
use crate::stats::DiffStats;

/// Separator line between blocks.
pub const DEFAULT_SEPARATOR: &str = "--------------";

/// Layout settings for [`ReportWriter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportStyle {
    /// Line written between blocks.
    pub separator: String,
    /// Minimum width of the right-aligned line number.
    pub number_width: usize,
    /// Pad the shorter label with spaces so both columns line up.
    pub pad_labels: bool,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            number_width: 4,
            pad_labels: true,
        }
    }
}

/// Streams change records to `out` as they are produced.
pub struct ReportWriter<'a, W: Write> {
    out: W,
    old: Lines<'a>,
    new: Lines<'a>,
    old_label: String,
    new_label: String,
    style: ReportStyle,
    last: Option<(Side, usize)>,
    stats: DiffStats,
}

impl<'a, W: Write> ReportWriter<'a, W> {
    /// Create a writer labelling lines of `old` and `new` with the given names.
    pub fn new(
        out: W,
        old: Lines<'a>,
        old_label: &str,
        new: Lines<'a>,
        new_label: &str,
        style: ReportStyle,
    ) -> Self {
        let (old_label, new_label) = if style.pad_labels {
            let width = old_label.chars().count().max(new_label.chars().count());
            (
                format!("{old_label:<width$}"),
                format!("{new_label:<width$}"),
            )
        } else {
            (old_label.to_string(), new_label.to_string())
        };
        Self {
            out,
            old,
            new,
            old_label,
            new_label,
            style,
            last: None,
            stats: DiffStats::default(),
        }
    }

    /// Render one record.
    pub fn write_record(&mut self, record: &ChangeRecord) -> io::Result<()> {
        let continues = match (self.last, record.single_side()) {
            (Some((last_side, last_line)), Some((side, range))) => {
                last_side == side && last_line + 1 == range.first()
            }
            _ => false,
        };
        if !continues {
            writeln!(self.out, "{}", self.style.separator)?;
        }

        match *record {
            ChangeRecord::Deletion { old } => self.write_lines(Side::Old, old)?,
            ChangeRecord::Insertion { new } => self.write_lines(Side::New, new)?,
            ChangeRecord::Replacement { old, new } => {
                self.write_lines(Side::Old, old)?;
                self.write_lines(Side::New, new)?;
            }
        }

        self.last = record
            .single_side()
            .map(|(side, range)| (side, range.last()));
        self.stats.record(record);
        Ok(())
    }

    /// Render every record from `records`.
    pub fn write_all<I>(&mut self, records: I) -> io::Result<()>
    where
        I: IntoIterator<Item = ChangeRecord>,
    {
        for record in records {
            self.write_record(&record)?;
        }
        Ok(())
    }

    /// Write the trailing separator (if anything was reported), flush, and
    /// return the totals.
    pub fn finish(mut self) -> io::Result<DiffStats> {
        if !self.stats.is_identical() {
            writeln!(self.out, "{}", self.style.separator)?;
        }
        self.out.flush()?;
        Ok(self.stats)
    }

    fn write_lines(&mut self, side: Side, range: LineRange) -> io::Result<()> {
        let (lines, label) = match side {
            Side::Old => (self.old, &self.old_label),
            Side::New => (self.new, &self.new_label),
        };
        let width = self.style.number_width;
        for (index, number) in range.indices().zip(range.numbers()) {
            write!(self.out, "\"{label}\", {number:>width$}: ")?;
            self.out.write_all(lines.text(index))?;
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}
