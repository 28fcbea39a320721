use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// How a file's contents are brought into memory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AcquireMode {
    /// Memory-map, falling back to a full read if mapping fails.
    #[default]
    Auto,
    /// Memory-map only.
    Map,
    /// Read the whole file into an owned buffer.
    Read,
}

/// Storage behind a [`ByteBuffer`].
#[derive(Debug)]
pub enum Backing {
    /// Read-only private mapping of the file.
    Mapped(Mmap),
    /// Contents read into memory.
    Owned(Vec<u8>),
    /// Zero-length file.
    Empty,
}

/// Immutable contents of one input file.
///
/// The bytes never change after acquisition. Dropping the buffer releases
/// the mapping, so anything borrowing [`ByteBuffer::as_bytes`] must be done
/// before then (the borrow checker enforces this).
#[derive(Debug)]
pub struct ByteBuffer {
    path: PathBuf,
    backing: Backing,
}

impl ByteBuffer {
    /// Acquire the contents of `path` using the given mode.
    pub fn open(path: impl AsRef<Path>, mode: AcquireMode) -> StoreResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let metadata = file.metadata().map_err(|source| StoreError::Metadata {
            path: path.to_path_buf(),
            source,
        })?;

        if metadata.len() == 0 && mode != AcquireMode::Read {
            // Empty regular files cannot be mapped; a non-regular file may
            // still report zero length and has to be read.
            if metadata.is_file() {
                debug!(path = %path.display(), "empty input file");
                return Ok(Self::empty(path));
            }
            return Self::read_from(path, file);
        }

        match mode {
            AcquireMode::Read => Self::read_from(path, file),
            AcquireMode::Map => Self::map(path, &file),
            AcquireMode::Auto => match Self::map(path, &file) {
                Ok(buffer) => Ok(buffer),
                Err(StoreError::Map { source, .. }) => {
                    warn!(
                        path = %path.display(),
                        error = %source,
                        "memory map failed; reading into memory instead"
                    );
                    Self::read_from(path, file)
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Wrap bytes that are already in memory.
    pub fn from_vec(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let backing = if bytes.is_empty() {
            Backing::Empty
        } else {
            Backing::Owned(bytes)
        };
        Self {
            path: path.into(),
            backing,
        }
    }

    fn empty(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            backing: Backing::Empty,
        }
    }

    fn map(path: &Path, file: &File) -> StoreResult<Self> {
        // SAFETY: the mapping is read-only and private. Concurrent truncation
        // of the file by another process is outside what this tool guards
        // against, as with any mmap-based reader.
        let mmap = unsafe { Mmap::map(file) }.map_err(|source| StoreError::Map {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = mmap.len(), "mapped input file");
        Ok(Self {
            path: path.to_path_buf(),
            backing: Backing::Mapped(mmap),
        })
    }

    fn read_from(path: &Path, mut file: File) -> StoreResult<Self> {
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .map_err(|source| StoreError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(path = %path.display(), bytes = bytes.len(), "read input file");
        Ok(Self::from_vec(path, bytes))
    }

    /// The path this buffer was acquired from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The file contents.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.backing {
            Backing::Mapped(mmap) => &mmap[..],
            Backing::Owned(bytes) => &bytes[..],
            Backing::Empty => &[],
        }
    }

    /// Exact length in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns `true` for a zero-length file.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the contents are memory-mapped.
    pub fn is_mapped(&self) -> bool {
        matches!(self.backing, Backing::Mapped(_))
    }

    /// The storage behind this buffer.
    pub fn backing(&self) -> &Backing {
        &self.backing
    }
}
