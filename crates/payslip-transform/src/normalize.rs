//! Cell and row normalization.
//!
//! Every function here is total: a register cell can be empty, misspelled
//! or outright garbage and the row still normalizes. Amounts fall back to
//! 0, dates pass through unchanged, identifiers keep their raw text. The
//! only thing a bad cell produces besides its fallback is a [`Degradation`]
//! entry the caller can report.

use chrono::{NaiveDate, NaiveDateTime};

use payslip_map::ColumnMap;
use payslip_model::{EmployeeRecord, Field, FieldKind};

/// A money cell that carried text no number could be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Degradation {
    pub field: Field,
    /// The offending cell text, for diagnostics.
    pub raw: String,
}

/// Result of normalizing one register row.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub record: EmployeeRecord,
    pub degraded: Vec<Degradation>,
}

/// Normalize one register row into an employee record.
///
/// Returns `None` for rows whose cells are all blank; those are layout
/// padding, not employees. `line` is the row's 1-based physical position
/// and seeds the synthetic employee code when the register has none.
#[must_use]
pub fn normalize_row(cells: &[String], map: &ColumnMap, line: u32) -> Option<NormalizedRow> {
    if cells.iter().all(|cell| cell.trim().is_empty()) {
        return None;
    }

    let text = |field: Field| -> String {
        map.value(field, cells).unwrap_or("").trim().to_string()
    };

    let mut degraded = Vec::new();
    let mut amount = |field: Field| -> f64 {
        debug_assert_eq!(field.kind(), FieldKind::Money);
        let raw = map.value(field, cells).unwrap_or("").trim();
        match parse_amount(raw) {
            Some(value) => value,
            None => {
                degraded.push(Degradation {
                    field,
                    raw: raw.to_string(),
                });
                0.0
            }
        }
    };

    let ecode = {
        let raw = text(Field::Ecode);
        if raw.is_empty() { format!("row{line}") } else { raw }
    };
    let uan = {
        let raw = text(Field::Uan);
        let cleaned = strip_integral_suffix(&raw);
        if cleaned.is_empty() {
            "NIL".to_string()
        } else {
            cleaned.to_string()
        }
    };
    let account_no = {
        let raw = text(Field::AccountNo);
        strip_integral_suffix(&raw).to_string()
    };
    let lop = {
        let raw = text(Field::Lop);
        if raw.is_empty() { "0".to_string() } else { raw }
    };

    let record = EmployeeRecord {
        employee_name: text(Field::EmployeeName),
        ecode,
        designation: text(Field::Designation),
        department: text(Field::Department),
        father_name: text(Field::FatherName),
        dob: normalize_date(&text(Field::Dob)),
        location: text(Field::Location),
        uan,
        esi_no: text(Field::EsiNo),
        pan_no: text(Field::PanNo),
        doj: normalize_date(&text(Field::Doj)),
        paid_days: text(Field::PaidDays),
        lop,
        pay_mode: text(Field::PayMode),
        bank_name: text(Field::BankName),
        account_no,
        pl: text(Field::Pl),
        sl: text(Field::Sl),
        cl: text(Field::Cl),
        basic: amount(Field::Basic),
        special_allowance: amount(Field::SpecialAllowance),
        travel_allowance: amount(Field::TravelAllowance),
        hra: amount(Field::Hra),
        nh_fh: amount(Field::NhFh),
        reimbursement: amount(Field::Reimbursement),
        epf: amount(Field::Epf),
        esi: amount(Field::Esi),
        pt: amount(Field::Pt),
        tds: amount(Field::Tds),
        adv_other: amount(Field::AdvOther),
        labour_welfare_fund: amount(Field::LabourWelfareFund),
    };

    Some(NormalizedRow { record, degraded })
}

/// Coerce an amount cell to a number.
///
/// Commas are treated as thousands separators and stripped before
/// parsing; blank and unparseable cells both coerce to 0.
#[must_use]
pub fn to_number(raw: &str) -> f64 {
    parse_amount(raw).unwrap_or(0.0)
}

/// `None` means the cell carried text that is not a number; `Some(0.0)`
/// means it was blank. Both coerce to 0, but only the former is worth a
/// warning.
fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(',', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok()
}

/// Reformat a date cell to DD-MM-YYYY.
///
/// Accepts the common spellings that show up in salary registers (ISO,
/// slashed, dotted, month names, Excel datetime strings). Ambiguous
/// slashed dates read day-first. Anything unrecognized passes through
/// unchanged so the payslip still shows what the register said.
#[must_use]
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match parse_flexible_date(trimmed) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => trimmed.to_string(),
    }
}

fn parse_flexible_date(value: &str) -> Option<NaiveDate> {
    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.date());
        }
    }

    const DATE_FORMATS: [&str; 14] = [
        "%Y-%m-%d",  // ISO: 2024-01-15
        "%Y/%m/%d",  // 2024/01/15
        "%d-%b-%Y",  // 15-Jan-2024
        "%d-%B-%Y",  // 15-January-2024
        "%d/%m/%Y",  // 15/01/2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d.%m.%Y",  // 15.01.2024
        "%Y%m%d",    // Compact: 20240115
        "%b %d, %Y", // Jan 15, 2024
        "%B %d, %Y", // January 15, 2024
        "%d %b %Y",  // 15 Jan 2024
        "%d %B %Y",  // 15 January 2024
        "%Y-%b-%d",  // 2024-Jan-15
        "%d-%m-%Y",  // 15-01-2024
    ];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }
    None
}

/// Drop a spreadsheet float's ".0" tail from a numeric identifier.
///
/// UAN and account numbers are digit strings, so "100234567890.0" is the
/// cell "100234567890" after a trip through a float column. The strip is
/// purely textual to avoid round-tripping long identifiers through f64.
#[must_use]
pub fn strip_integral_suffix(raw: &str) -> &str {
    let Some((int_part, frac_part)) = raw.split_once('.') else {
        return raw;
    };
    if frac_part.is_empty() || !frac_part.bytes().all(|b| b == b'0') {
        return raw;
    }
    let digits = int_part.strip_prefix('-').unwrap_or(int_part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw;
    }
    int_part
}
