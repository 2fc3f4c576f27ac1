use std::{fs::File, ops::Deref, path::Path};

use snafu::ResultExt;

use crate::{IoError, Result};

/// A read-only byte container backing one on-disk artifact.
///
/// The usual path is a memory mapping, so loading is dominated by page
/// faults rather than parsing. Owned bytes exist for tests and for callers
/// that already hold the artifact in memory.
#[derive(Debug)]
pub enum Blob {
    Mapped(memmap::Mmap),
    Owned(Vec<u8>),
}

impl Blob {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Blob> {
        let file = File::open(path.as_ref()).context(IoError)?;
        // Safety: the mapping is never mutated and the artifact contract
        // treats concurrent writers as a programmer error.
        let map = unsafe { memmap::Mmap::map(&file) }.context(IoError)?;
        Ok(Blob::Mapped(map))
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Blob {
        Blob::Owned(bytes)
    }
}

impl Deref for Blob {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Blob::Mapped(map) => map,
            Blob::Owned(bytes) => bytes,
        }
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        self
    }
}
