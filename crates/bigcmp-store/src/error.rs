use std::path::PathBuf;

/// Errors from acquiring a file's contents.
///
/// Every variant names the offending file and carries the underlying system
/// error, so the diagnostic printed by the CLI identifies both.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be opened.
    #[error("failed to open input file \"{}\"", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file's length could not be determined.
    #[error("failed to stat input file \"{}\"", .path.display())]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file could not be memory-mapped.
    #[error("failed to map input file \"{}\"", .path.display())]
    Map {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file could not be read into memory.
    #[error("failed to read input file \"{}\"", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// The path of the file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. }
            | Self::Metadata { path, .. }
            | Self::Map { path, .. }
            | Self::Read { path, .. } => path,
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
