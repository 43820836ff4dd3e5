//! Error types for salary register loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a salary register.
///
/// Every variant is fatal to the run: no archive is produced when the
/// register itself cannot be read.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Register file does not exist.
    #[error("salary register not found: {path}")]
    FileNotFound { path: PathBuf },

    /// File extension is not one of the supported register formats.
    #[error("unsupported register format {extension:?} (expected .xlsx, .xlsm, .xls or .csv)")]
    UnsupportedFormat { extension: String },

    /// Workbook contains no sheets.
    #[error("workbook has no sheets: {path}")]
    EmptyWorkbook { path: PathBuf },

    /// The fixed header row (third physical row) is missing.
    #[error("register too short: header expected on row {expected}, file has {rows} rows")]
    MissingHeaderRow { expected: u32, rows: usize },

    /// Excel parsing failure.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// CSV parsing failure.
    #[error("failed to read csv: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl IngestError {
    pub(crate) fn file_not_found(path: &std::path::Path) -> Self {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    }

    pub(crate) fn empty_workbook(path: &std::path::Path) -> Self {
        IngestError::EmptyWorkbook {
            path: path.to_path_buf(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
