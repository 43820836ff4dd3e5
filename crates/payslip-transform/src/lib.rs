//! Row normalization for payslip generation.
//!
//! Turns raw register cells into [`payslip_model::EmployeeRecord`] values:
//! amount cells become numbers, date cells become DD-MM-YYYY, identifier
//! cells lose their spreadsheet float tails, and blank rows disappear.

pub mod money;
pub mod normalize;

pub use money::money;
pub use normalize::{
    Degradation, NormalizedRow, normalize_date, normalize_row, strip_integral_suffix, to_number,
};
