//! The run's observability seam.
//!
//! The packager reports progress through an explicit collaborator rather
//! than ambient global logging, so tests can capture the exact sequence
//! of events without touching the process-wide subscriber.

use std::path::Path;

use tracing::{debug, info, warn};

use payslip_map::ColumnMap;
use payslip_model::Field;

/// Receives the observable events of one run, in emission order.
///
/// All methods default to no-ops so implementations only pick up the
/// events they care about.
pub trait RunObserver {
    /// The register loaded successfully with this many data rows.
    fn register_loaded(&mut self, _path: &Path, _rows: usize) {}

    /// The column map was resolved (once per run).
    fn columns_resolved(&mut self, _map: &ColumnMap) {}

    /// A non-empty amount cell carried text no number could be read from;
    /// the field proceeds as zero.
    fn field_degraded(&mut self, _line: u32, _field: Field, _raw: &str) {}

    /// One payslip was added to the archive.
    fn document_added(&mut self, _entry: &str) {}

    /// One row was dropped; the run continues without it.
    fn row_failed(&mut self, _line: u32, _employee: &str, _reason: &str) {}

    /// The archive was sealed and written.
    fn run_complete(&mut self, _documents: usize, _archive: &Path) {}
}

/// Production observer forwarding every event to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn register_loaded(&mut self, path: &Path, rows: usize) {
        info!(path = %path.display(), rows, "loaded salary register");
    }

    fn columns_resolved(&mut self, map: &ColumnMap) {
        debug!(resolved = map.resolved_count(), "column map resolved");
        for line in map.describe().lines() {
            debug!("  {line}");
        }
    }

    fn field_degraded(&mut self, line: u32, field: Field, raw: &str) {
        warn!(row = line, %field, raw, "amount cell is not numeric, using 0");
    }

    fn document_added(&mut self, entry: &str) {
        info!(entry, "added payslip to archive");
    }

    fn row_failed(&mut self, line: u32, employee: &str, reason: &str) {
        warn!(row = line, employee, reason, "payslip dropped from archive");
    }

    fn run_complete(&mut self, documents: usize, archive: &Path) {
        info!(documents, archive = %archive.display(), "payslip run complete");
    }
}
