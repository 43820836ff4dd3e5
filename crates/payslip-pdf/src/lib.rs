//! Deterministic single-page payslip rendering.
//!
//! Takes a [`payslip_model::RunHeader`] and one normalized
//! [`payslip_model::EmployeeRecord`] and produces the bytes of a
//! fixed-layout A4 PDF. No I/O happens here; failures cannot occur per
//! record, so the row-level recovery boundary lives with the caller.

mod canvas;
mod metrics;
mod payslip;

pub use payslip::render_payslip;
