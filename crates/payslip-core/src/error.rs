//! Run-level errors for the batch packager.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal conditions that abort a whole run before or after the row loop.
///
/// Per-row problems never surface here; they are reported through the
/// [`crate::RunObserver`] and the run continues.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The salary register could not be loaded at all.
    #[error(transparent)]
    Ingest(#[from] payslip_ingest::IngestError),

    /// The in-memory archive could not be finalized.
    #[error("failed to finalize archive: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The sealed archive could not be written beside the register.
    #[error("failed to write archive {path}: {source}")]
    WriteArchive {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PackageError>;
