use std::io::Write;

use anyhow::Context;
use bigcmp_diff::{diff_lines, DiffStats, ExactMatcher, JsonReport, ReportWriter};
use bigcmp_index::LineTable;
use bigcmp_store::ByteBuffer;
use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::config::CompareConfig;

/// Result of a completed comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Identical,
    Different(DiffStats),
}

/// Compare the two files named on the command line.
///
/// Both files are acquired and indexed before anything is written, so a
/// failure on either produces no partial report. The report goes to
/// `stdout`; the "identical" status goes to `stderr`.
pub fn run_compare<O: Write, E: Write>(
    cli: &Cli,
    stdout: O,
    mut stderr: E,
) -> anyhow::Result<Outcome> {
    let config = CompareConfig::from_cli(cli)?;
    let old_label = cli.old.display().to_string();
    let new_label = cli.new.display().to_string();

    let old_buffer = ByteBuffer::open(&cli.old, config.acquire)?;
    let new_buffer = ByteBuffer::open(&cli.new, config.acquire)?;

    let old_table = LineTable::build(old_buffer.as_bytes())
        .with_context(|| format!("failed to index input file \"{old_label}\""))?;
    let new_table = LineTable::build(new_buffer.as_bytes())
        .with_context(|| format!("failed to index input file \"{new_label}\""))?;
    let old_lines = old_table.view(old_buffer.as_bytes())?;
    let new_lines = new_table.view(new_buffer.as_bytes())?;

    info!(
        engine = config.engine.name(),
        old_lines = old_lines.len(),
        new_lines = new_lines.len(),
        "comparing"
    );
    let records = diff_lines(
        config.engine,
        old_lines,
        new_lines,
        ExactMatcher,
        config.sequential_options(),
    );

    let stats = match config.format {
        OutputFormat::Text => {
            let mut report = ReportWriter::new(
                stdout,
                old_lines,
                &old_label,
                new_lines,
                &new_label,
                config.report_style(),
            );
            report.write_all(records).context("failed to write report")?;
            report.finish().context("failed to write report")?
        }
        OutputFormat::Json => {
            let report = JsonReport::collect(old_lines, &old_label, new_lines, &new_label, records);
            report.write_to(stdout).context("failed to write report")?;
            report.stats
        }
    };
    debug!(
        records = stats.records,
        deleted = stats.deleted,
        inserted = stats.inserted,
        replaced = stats.replaced,
        old_lines_changed = stats.old_lines_changed(),
        new_lines_changed = stats.new_lines_changed(),
        "comparison finished"
    );

    if stats.is_identical() {
        writeln!(stderr, "Files are identical")?;
        Ok(Outcome::Identical)
    } else {
        Ok(Outcome::Different(stats))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use clap::Parser;

    use super::*;

    struct Workspace {
        dir: tempfile::TempDir,
    }

    impl Workspace {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn write(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    fn run(args: &[&str], old: &Path, new: &Path) -> (anyhow::Result<Outcome>, String, String) {
        let mut argv = vec!["bigcmp".to_string()];
        argv.extend(args.iter().map(|a| a.to_string()));
        argv.push(old.display().to_string());
        argv.push(new.display().to_string());
        let cli = Cli::try_parse_from(argv).unwrap();

        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let outcome = run_compare(&cli, &mut stdout, &mut stderr);
        (
            outcome,
            String::from_utf8(stdout).unwrap(),
            String::from_utf8(stderr).unwrap(),
        )
    }

    #[test]
    fn identical_files_report_on_stderr() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "a\nb\n");
        let new = ws.write("new.txt", "a\nb\n");
        let (outcome, stdout, stderr) = run(&[], &old, &new);
        assert_eq!(outcome.unwrap(), Outcome::Identical);
        assert_eq!(stdout, "");
        assert_eq!(stderr, "Files are identical\n");
    }

    #[test]
    fn empty_files_are_identical() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "");
        let new = ws.write("new.txt", "");
        for engine in ["sequential", "block"] {
            let (outcome, stdout, _) = run(&["--engine", engine], &old, &new);
            assert_eq!(outcome.unwrap(), Outcome::Identical);
            assert_eq!(stdout, "");
        }
    }

    #[test]
    fn text_report_for_a_changed_line() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "apple\nbanana\ncherry\n");
        let new = ws.write("new.txt", "apple\nblueberry\ncherry\n");
        let (outcome, stdout, stderr) = run(&[], &old, &new);

        let expected = format!(
            "--------------\n\"{}\",    2: banana\n\"{}\",    2: blueberry\n--------------\n",
            old.display(),
            new.display()
        );
        assert_eq!(stdout, expected);
        assert_eq!(stderr, "");
        match outcome.unwrap() {
            Outcome::Different(stats) => assert_eq!(stats.replaced, 1),
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn empty_against_three_lines() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "");
        let new = ws.write("new.txt", "x\ny\nz\n");
        for engine in ["sequential", "block"] {
            let (outcome, stdout, _) = run(&["-e", engine], &old, &new);
            match outcome.unwrap() {
                Outcome::Different(stats) => {
                    assert_eq!(stats.records, 1);
                    assert_eq!(stats.inserted, 3);
                }
                other => panic!("unexpected outcome {other:?}"),
            }
            assert_eq!(stdout.lines().count(), 5, "{stdout}");
        }
    }

    #[test]
    fn block_engine_groups_deletions() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "x\nd1\nd2\ny\n");
        let new = ws.write("new.txt", "x\ny\n");
        let (outcome, stdout, _) = run(&["--engine", "block", "--no-pad"], &old, &new);
        assert!(matches!(outcome.unwrap(), Outcome::Different(_)));
        let expected = format!(
            "--------------\n\"{0}\",    2: d1\n\"{0}\",    3: d2\n--------------\n",
            old.display()
        );
        assert_eq!(stdout, expected);
    }

    #[test]
    fn labels_are_padded_to_equal_width() {
        let ws = Workspace::new();
        let old = ws.write("a.txt", "1\n");
        let new = ws.write("longer.txt", "2\n");
        let (_, stdout, _) = run(&[], &old, &new);
        let old_label = old.display().to_string();
        let padded = format!("\"{old_label}     \",    1: 1");
        assert!(stdout.contains(&padded), "{stdout}");
    }

    #[test]
    fn json_report() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "x\ny\n");
        let new = ws.write("new.txt", "x\nmid\ny\n");
        let (outcome, stdout, _) = run(&["--format", "json"], &old, &new);
        assert!(matches!(outcome.unwrap(), Outcome::Different(_)));
        assert!(stdout.contains("\"kind\": \"insertion\""), "{stdout}");
        assert!(stdout.contains("\"mid\""), "{stdout}");
    }

    #[test]
    fn read_mode_gives_same_report() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "1\n\n3\n");
        let new = ws.write("new.txt", "1\n2\n\n3\n");
        let (_, mapped, _) = run(&[], &old, &new);
        let (_, read, _) = run(&["--acquire", "read"], &old, &new);
        assert_eq!(mapped, read);
        assert!(mapped.contains(",    2: 2\n"));
    }

    #[test]
    fn missing_file_is_fatal_before_output() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "a\n");
        let missing = ws.dir.path().join("missing.txt");
        let (outcome, stdout, stderr) = run(&[], &old, &missing);
        let os_error = fs::File::open(&missing).unwrap_err();
        let err = outcome.unwrap_err();
        assert_eq!(
            format!("{err:#}"),
            format!(
                "failed to open input file \"{}\": {os_error}",
                missing.display()
            )
        );
        assert_eq!(stdout, "");
        assert_eq!(stderr, "");
    }

    #[test]
    fn config_file_selects_engine_and_style() {
        let ws = Workspace::new();
        let old = ws.write("old.txt", "x\nd1\nd2\ny\n");
        let new = ws.write("new.txt", "x\ny\n");
        let config = ws.write("bigcmp.toml", "engine = \"block\"\nseparator = \"==\"\n");
        let config = config.display().to_string();
        let (_, stdout, _) = run(&["--config", &config], &old, &new);
        assert!(stdout.starts_with("==\n"), "{stdout}");
        assert_eq!(stdout.matches("==\n").count(), 2, "{stdout}");
    }
}
