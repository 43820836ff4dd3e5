//! Batch packaging: drives the register through normalization and
//! rendering, collecting every successful payslip into one ZIP archive.
//!
//! A run either aborts on a fatal load error before any row is attempted
//! or completes with every row attempted; individual row failures are
//! reported to the [`RunObserver`] and never stop the batch.

mod archive;
mod clock;
mod error;
mod generate;
mod observer;

pub mod naming;

pub use archive::EntryError;
pub use clock::{Clock, SystemClock};
pub use error::{PackageError, Result};
pub use generate::{RunSummary, generate, generate_with_clock};
pub use observer::{RunObserver, TracingObserver};
