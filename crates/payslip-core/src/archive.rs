//! In-memory ZIP assembly.
//!
//! The whole batch materializes in memory and the archive is written to
//! disk in one shot after sealing, so a crashed run never leaves a
//! half-written archive behind.

use std::collections::BTreeSet;
use std::io::{Cursor, Write as _};

use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Failure to append one entry. Row-level: the offending row is dropped
/// and the run continues.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("archive already contains an entry named {name:?}")]
    DuplicateName { name: String },

    #[error("failed to append archive entry: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

pub(crate) struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    names: BTreeSet<String>,
}

impl ArchiveBuilder {
    pub(crate) fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            names: BTreeSet::new(),
        }
    }

    /// Append one deflated entry. Duplicate names are refused so that no
    /// document can silently shadow another in the sealed archive.
    pub(crate) fn add(&mut self, name: &str, bytes: &[u8]) -> Result<(), EntryError> {
        if !self.names.insert(name.to_string()) {
            return Err(EntryError::DuplicateName {
                name: name.to_string(),
            });
        }
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer.start_file(name, options)?;
        self.writer.write_all(bytes)?;
        Ok(())
    }

    /// Seal the archive and hand back its bytes.
    pub(crate) fn finish(self) -> Result<Vec<u8>, zip::result::ZipError> {
        Ok(self.writer.finish()?.into_inner())
    }
}
