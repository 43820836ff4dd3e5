use serde::{Deserialize, Serialize};
use std::fmt;

/// How a canonical field's raw cell value is interpreted during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free text, kept as a trimmed string.
    Text,
    /// Monetary amount, coerced to a number (unparseable values become 0).
    Money,
    /// Calendar date, reformatted to DD-MM-YYYY when parseable.
    Date,
    /// Numeric-looking identifier where a trailing ".0" from spreadsheet
    /// floats is noise, never a decimal.
    Identifier,
}

/// Canonical salary-register fields.
///
/// Every payslip is built from this fixed set. Input registers name their
/// columns freely; [`Field::aliases`] lists the accepted spellings for each
/// field in priority order (matching is case-insensitive, first hit wins).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Field {
    EmployeeName,
    Ecode,
    Designation,
    Department,
    FatherName,
    Dob,
    Location,
    Uan,
    EsiNo,
    PanNo,
    Doj,
    PaidDays,
    Lop,
    PayMode,
    BankName,
    AccountNo,
    Pl,
    Sl,
    Cl,
    Basic,
    SpecialAllowance,
    TravelAllowance,
    Hra,
    NhFh,
    Reimbursement,
    Epf,
    Esi,
    Pt,
    Tds,
    AdvOther,
    LabourWelfareFund,
}

impl Field {
    /// All canonical fields in schema order.
    pub const ALL: [Field; 31] = [
        Field::EmployeeName,
        Field::Ecode,
        Field::Designation,
        Field::Department,
        Field::FatherName,
        Field::Dob,
        Field::Location,
        Field::Uan,
        Field::EsiNo,
        Field::PanNo,
        Field::Doj,
        Field::PaidDays,
        Field::Lop,
        Field::PayMode,
        Field::BankName,
        Field::AccountNo,
        Field::Pl,
        Field::Sl,
        Field::Cl,
        Field::Basic,
        Field::SpecialAllowance,
        Field::TravelAllowance,
        Field::Hra,
        Field::NhFh,
        Field::Reimbursement,
        Field::Epf,
        Field::Esi,
        Field::Pt,
        Field::Tds,
        Field::AdvOther,
        Field::LabourWelfareFund,
    ];

    /// Returns the canonical field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::EmployeeName => "EmployeeName",
            Field::Ecode => "Ecode",
            Field::Designation => "Designation",
            Field::Department => "Department",
            Field::FatherName => "FatherName",
            Field::Dob => "DOB",
            Field::Location => "Location",
            Field::Uan => "UAN",
            Field::EsiNo => "ESI_No",
            Field::PanNo => "PAN_No",
            Field::Doj => "DOJ",
            Field::PaidDays => "PaidDays",
            Field::Lop => "LOP",
            Field::PayMode => "PayMode",
            Field::BankName => "BankName",
            Field::AccountNo => "AccountNo",
            Field::Pl => "PL",
            Field::Sl => "SL",
            Field::Cl => "CL",
            Field::Basic => "Basic",
            Field::SpecialAllowance => "SpecialAllowance",
            Field::TravelAllowance => "TravelAllowance",
            Field::Hra => "HRA",
            Field::NhFh => "NH_FH",
            Field::Reimbursement => "Reimbursement",
            Field::Epf => "EPF",
            Field::Esi => "ESI",
            Field::Pt => "PT",
            Field::Tds => "TDS",
            Field::AdvOther => "Adv_Other",
            Field::LabourWelfareFund => "LabourWelfareFund",
        }
    }

    /// Accepted register column spellings, highest priority first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::EmployeeName => &["Employee Name", "EmployeeName", "Name"],
            // "ecode" is subsumed by "Ecode": alias lookup is
            // case-insensitive.
            Field::Ecode => &["E code", "Ecode", "Emp Code"],
            Field::Designation => &["Designation"],
            Field::Department => &["Department"],
            Field::FatherName => &["Father / Husband Name", "FatherName", "Father"],
            Field::Dob => &["DOB", "Date of Birth"],
            Field::Location => &["Location"],
            Field::Uan => &["UAN"],
            // "ESI No" is subsumed by "Esi No": alias lookup is
            // case-insensitive.
            Field::EsiNo => &["Esi No", "ESI_No"],
            Field::PanNo => &["PAN No", "PAN"],
            Field::Doj => &["DOJ", "Date of Joining"],
            Field::PaidDays => &["Paid Days", "PaidDays"],
            Field::Lop => &["LOP", "Loss of Pay"],
            Field::PayMode => &["Pay Mode", "PayMode"],
            Field::BankName => &["Bank name", "BankName"],
            Field::AccountNo => &["Account No", "AccountNo"],
            Field::Pl => &["PL"],
            Field::Sl => &["SL"],
            Field::Cl => &["CL"],
            Field::Basic => &["Basic"],
            // "Special Allownace" is a known register typo that must keep matching.
            Field::SpecialAllowance => {
                &["Special Allowance", "Special Allownace", "SpecialAllowance"]
            }
            Field::TravelAllowance => &["Travel Allowance", "TravelAllowance"],
            Field::Hra => &["House Rent Allowance", "HRA"],
            Field::NhFh => &["NH/FH", "NH_FH"],
            Field::Reimbursement => &["Reimbursement"],
            Field::Epf => &["EPF"],
            Field::Esi => &["ESI"],
            Field::Pt => &["PT"],
            Field::Tds => &["TDS"],
            Field::AdvOther => &["Adv/Other", "Adv_Other", "Advance"],
            Field::LabourWelfareFund => &["Labour Welfare Fund", "LabourWelfareFund"],
        }
    }

    /// Returns how raw values for this field are interpreted.
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Basic
            | Field::SpecialAllowance
            | Field::TravelAllowance
            | Field::Hra
            | Field::NhFh
            | Field::Reimbursement
            | Field::Epf
            | Field::Esi
            | Field::Pt
            | Field::Tds
            | Field::AdvOther
            | Field::LabourWelfareFund => FieldKind::Money,
            Field::Dob | Field::Doj => FieldKind::Date,
            Field::Uan | Field::AccountNo => FieldKind::Identifier,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_field_has_aliases() {
        for field in Field::ALL {
            assert!(
                !field.aliases().is_empty(),
                "{field} must accept at least one column spelling"
            );
        }
    }

    #[test]
    fn primary_alias_is_unique_across_fields() {
        let mut seen = std::collections::BTreeSet::new();
        for field in Field::ALL {
            for alias in field.aliases() {
                assert!(
                    seen.insert(alias.to_lowercase()),
                    "alias {alias:?} claimed by more than one field"
                );
            }
        }
    }

    #[test]
    fn money_fields_are_the_twelve_ledger_lines() {
        let money: Vec<Field> = Field::ALL
            .into_iter()
            .filter(|f| f.kind() == FieldKind::Money)
            .collect();
        assert_eq!(money.len(), 12);
        assert_eq!(money[0], Field::Basic);
        assert_eq!(money[11], Field::LabourWelfareFund);
    }
}
