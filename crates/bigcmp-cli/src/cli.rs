use std::path::PathBuf;

use bigcmp_diff::Engine;
use bigcmp_store::AcquireMode;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(
    name = "bigcmp",
    about = "Compare two large text files line by line",
    long_about = "Compare two large text files line by line. \
    Built for huge inputs with small, localised changes: files are memory-mapped \
    and compared in a single pass unless the block engine is selected.",
    version
)]
pub struct Cli {
    /// The file to compare against
    #[arg(value_name = "OLDFILE")]
    pub old: PathBuf,

    /// The changed file
    #[arg(value_name = "NEWFILE")]
    pub new: PathBuf,

    /// Difference engine: sequential for huge files, block for smaller diffs
    #[arg(short, long, value_enum)]
    pub engine: Option<EngineArg>,

    /// Limit how far the sequential engine looks ahead after a mismatch
    #[arg(long, value_name = "LINES")]
    pub max_gap: Option<usize>,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How input files are loaded
    #[arg(long, value_enum)]
    pub acquire: Option<AcquireArg>,

    /// Do not pad the shorter file name in the report
    #[arg(long)]
    pub no_pad: bool,

    /// Read settings from a TOML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineArg {
    Sequential,
    Block,
}

impl From<EngineArg> for Engine {
    fn from(arg: EngineArg) -> Self {
        match arg {
            EngineArg::Sequential => Engine::Sequential,
            EngineArg::Block => Engine::Block,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AcquireArg {
    Auto,
    Map,
    Read,
}

impl From<AcquireArg> for AcquireMode {
    fn from(arg: AcquireArg) -> Self {
        match arg {
            AcquireArg::Auto => AcquireMode::Auto,
            AcquireArg::Map => AcquireMode::Map,
            AcquireArg::Read => AcquireMode::Read,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Print a parse failure or help text and return the process exit status.
///
/// Help goes to standard error and exits successfully; `--version` goes to
/// standard output. Any other usage error exits with status 2.
pub fn report_usage(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayVersion => {
            print!("{}", err.render());
            0
        }
        ErrorKind::DisplayHelp => {
            eprint!("{}", err.render());
            0
        }
        _ => {
            eprint!("{}", err.render());
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_files() {
        let cli = Cli::try_parse_from(["bigcmp", "old.txt", "new.txt"]).unwrap();
        assert_eq!(cli.old, PathBuf::from("old.txt"));
        assert_eq!(cli.new, PathBuf::from("new.txt"));
        assert!(cli.engine.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_engine_block() {
        let cli = Cli::try_parse_from(["bigcmp", "-e", "block", "a", "b"]).unwrap();
        assert_eq!(cli.engine, Some(EngineArg::Block));
        assert_eq!(Engine::from(EngineArg::Block), Engine::Block);
    }

    #[test]
    fn parse_options() {
        let cli = Cli::try_parse_from([
            "bigcmp",
            "--max-gap",
            "1000",
            "--format",
            "json",
            "--acquire",
            "read",
            "--no-pad",
            "--verbose",
            "a",
            "b",
        ])
        .unwrap();
        assert_eq!(cli.max_gap, Some(1000));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert_eq!(cli.acquire, Some(AcquireArg::Read));
        assert!(cli.no_pad);
        assert!(cli.verbose);
    }

    #[test]
    fn one_file_is_a_usage_error() {
        let err = Cli::try_parse_from(["bigcmp", "only-one"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(report_usage(&err), 2);
    }

    #[test]
    fn three_files_is_a_usage_error() {
        let err = Cli::try_parse_from(["bigcmp", "a", "b", "c"]).unwrap_err();
        assert_eq!(report_usage(&err), 2);
    }

    #[test]
    fn help_exits_successfully() {
        let err = Cli::try_parse_from(["bigcmp", "-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(report_usage(&err), 0);
    }

    #[test]
    fn unknown_engine_rejected() {
        assert!(Cli::try_parse_from(["bigcmp", "-e", "myers", "a", "b"]).is_err());
    }
}
