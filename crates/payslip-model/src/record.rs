use serde::{Deserialize, Serialize};

/// Batch-constant header values supplied by the caller.
///
/// These are printed verbatim on every payslip of a run; an empty address is
/// legal and simply renders no address lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHeader {
    pub company: String,
    pub address: String,
    /// Display month, e.g. "August 2025". Also feeds the archive file name.
    pub month: String,
    /// Work location printed in the identity box.
    pub location: String,
}

/// One employee's normalized payslip inputs.
///
/// All text fields hold already-normalized values (trimmed, dates as
/// DD-MM-YYYY or raw passthrough, UAN defaulted to "NIL", LOP to "0").
/// The twelve money fields are plain numbers; unparseable register cells
/// arrive here as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_name: String,
    pub ecode: String,
    pub designation: String,
    pub department: String,
    pub father_name: String,
    pub dob: String,
    pub location: String,
    pub uan: String,
    pub esi_no: String,
    pub pan_no: String,
    pub doj: String,
    pub paid_days: String,
    pub lop: String,
    pub pay_mode: String,
    pub bank_name: String,
    pub account_no: String,
    pub pl: String,
    pub sl: String,
    pub cl: String,
    pub basic: f64,
    pub special_allowance: f64,
    pub travel_allowance: f64,
    pub hra: f64,
    pub nh_fh: f64,
    pub reimbursement: f64,
    pub epf: f64,
    pub esi: f64,
    pub pt: f64,
    pub tds: f64,
    pub adv_other: f64,
    pub labour_welfare_fund: f64,
}

impl EmployeeRecord {
    /// Sum of the six earnings lines.
    #[must_use]
    pub fn gross(&self) -> f64 {
        self.basic
            + self.special_allowance
            + self.travel_allowance
            + self.hra
            + self.nh_fh
            + self.reimbursement
    }

    /// Sum of the six deduction lines.
    #[must_use]
    pub fn total_deductions(&self) -> f64 {
        self.epf + self.esi + self.pt + self.tds + self.adv_other + self.labour_welfare_fund
    }

    /// Net payable: gross earnings minus total deductions.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.gross() - self.total_deductions()
    }
}
