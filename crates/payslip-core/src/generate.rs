//! The batch run: register in, sealed archive out.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info_span;

use payslip_ingest::read_register;
use payslip_map::resolve_columns;
use payslip_model::RunHeader;
use payslip_pdf::render_payslip;
use payslip_transform::normalize_row;

use crate::archive::ArchiveBuilder;
use crate::clock::{Clock, SystemClock};
use crate::error::{PackageError, Result};
use crate::naming;
use crate::observer::RunObserver;

/// What one completed run produced.
///
/// The archive location is an explicit return value; callers never have
/// to rediscover it by scanning directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Where the sealed archive was written (beside the input register).
    pub archive_path: PathBuf,
    /// Payslips successfully added to the archive.
    pub documents: usize,
    /// Rows skipped because every cell was blank.
    pub rows_skipped: usize,
    /// Rows dropped by a row-level failure.
    pub rows_failed: usize,
}

/// Run the whole batch against the system clock.
///
/// # Errors
///
/// Fails only on run-fatal conditions: an unreadable register, or the
/// sealed archive not writing to disk. Row problems are reported through
/// the observer and absorbed.
pub fn generate(
    register_path: &Path,
    header: &RunHeader,
    observer: &mut dyn RunObserver,
) -> Result<RunSummary> {
    generate_with_clock(register_path, header, observer, &SystemClock)
}

/// [`generate`] with a caller-supplied clock, so tests can pin the
/// timestamp embedded in the archive name.
pub fn generate_with_clock(
    register_path: &Path,
    header: &RunHeader,
    observer: &mut dyn RunObserver,
    clock: &dyn Clock,
) -> Result<RunSummary> {
    let span = info_span!("payslip_run", month = %header.month);
    let _guard = span.enter();

    let register = read_register(register_path)?;
    observer.register_loaded(register_path, register.rows.len());

    let map = resolve_columns(&register.headers);
    observer.columns_resolved(&map);

    let archive_name = naming::archive_file_name(&header.month, clock.now());
    let archive_path = register_path
        .parent()
        .map_or_else(PathBuf::new, Path::to_path_buf)
        .join(archive_name);

    let mut archive = ArchiveBuilder::new();
    let mut documents = 0usize;
    let mut rows_skipped = 0usize;
    let mut rows_failed = 0usize;

    for row in &register.rows {
        let Some(normalized) = normalize_row(&row.cells, &map, row.line) else {
            rows_skipped += 1;
            continue;
        };
        for degradation in &normalized.degraded {
            observer.field_degraded(row.line, degradation.field, &degradation.raw);
        }
        let record = normalized.record;
        let entry = naming::entry_name(&record.ecode, &record.employee_name);
        let bytes = render_payslip(header, &record);
        match archive.add(&entry, &bytes) {
            Ok(()) => {
                documents += 1;
                observer.document_added(&entry);
            }
            Err(error) => {
                rows_failed += 1;
                observer.row_failed(row.line, &record.employee_name, &error.to_string());
            }
        }
    }

    let bytes = archive.finish()?;
    // Stage beside the final name and rename into place, so an I/O
    // failure mid-write never leaves a truncated .zip behind.
    let staging_path = archive_path.with_extension("zip.part");
    if let Err(source) = fs::write(&staging_path, &bytes) {
        let _ = fs::remove_file(&staging_path);
        return Err(PackageError::WriteArchive {
            path: archive_path,
            source,
        });
    }
    fs::rename(&staging_path, &archive_path).map_err(|source| PackageError::WriteArchive {
        path: archive_path.clone(),
        source,
    })?;
    observer.run_complete(documents, &archive_path);

    Ok(RunSummary {
        archive_path,
        documents,
        rows_skipped,
        rows_failed,
    })
}
