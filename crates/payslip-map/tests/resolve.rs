use payslip_map::resolve_columns;
use payslip_model::Field;

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

#[test]
fn matches_are_case_insensitive() {
    let map = resolve_columns(&headers(&["EMPLOYEE NAME", "e CODE", "designation"]));
    assert_eq!(map.get(Field::EmployeeName).unwrap().header, "EMPLOYEE NAME");
    assert_eq!(map.get(Field::Ecode).unwrap().index, 1);
    assert!(map.is_resolved(Field::Designation));
}

#[test]
fn earlier_alias_wins_over_later_one() {
    // Both "Employee Name" and "Name" are present; the higher-priority
    // alias must decide which column backs the field.
    let map = resolve_columns(&headers(&["Name", "Employee Name"]));
    let resolved = map.get(Field::EmployeeName).unwrap();
    assert_eq!(resolved.header, "Employee Name");
    assert_eq!(resolved.index, 1);
}

#[test]
fn misspelled_allowance_header_is_accepted() {
    let map = resolve_columns(&headers(&["Special Allownace"]));
    assert!(map.is_resolved(Field::SpecialAllowance));
}

#[test]
fn unknown_headers_leave_fields_unresolved() {
    let map = resolve_columns(&headers(&["Gratuity", "Employee Name"]));
    assert!(map.is_resolved(Field::EmployeeName));
    assert!(!map.is_resolved(Field::Basic));
    assert!(!map.is_resolved(Field::Uan));
    assert_eq!(map.resolved_count(), 1);
}

#[test]
fn value_returns_cell_for_resolved_field() {
    let map = resolve_columns(&headers(&["E code", "Basic"]));
    let cells = vec!["E042".to_string(), "18000".to_string()];
    assert_eq!(map.value(Field::Ecode, &cells), Some("E042"));
    assert_eq!(map.value(Field::Basic, &cells), Some("18000"));
    assert_eq!(map.value(Field::Hra, &cells), None);
}

#[test]
fn value_is_none_when_row_is_short() {
    let map = resolve_columns(&headers(&["E code", "Basic"]));
    let cells = vec!["E042".to_string()];
    assert_eq!(map.value(Field::Basic, &cells), None);
}

#[test]
fn describe_lists_every_field() {
    let map = resolve_columns(&headers(&[
        "Employee Name",
        "E code",
        "Basic",
        "House Rent Allowance",
        "EPF",
    ]));
    insta::assert_snapshot!(map.describe(), @r#"
    EmployeeName <- "Employee Name" (column 0)
    Ecode <- "E code" (column 1)
    Designation <- (unresolved)
    Department <- (unresolved)
    FatherName <- (unresolved)
    DOB <- (unresolved)
    Location <- (unresolved)
    UAN <- (unresolved)
    ESI_No <- (unresolved)
    PAN_No <- (unresolved)
    DOJ <- (unresolved)
    PaidDays <- (unresolved)
    LOP <- (unresolved)
    PayMode <- (unresolved)
    BankName <- (unresolved)
    AccountNo <- (unresolved)
    PL <- (unresolved)
    SL <- (unresolved)
    CL <- (unresolved)
    Basic <- "Basic" (column 2)
    SpecialAllowance <- (unresolved)
    TravelAllowance <- (unresolved)
    HRA <- "House Rent Allowance" (column 3)
    NH_FH <- (unresolved)
    Reimbursement <- (unresolved)
    EPF <- "EPF" (column 4)
    ESI <- (unresolved)
    PT <- (unresolved)
    TDS <- (unresolved)
    Adv_Other <- (unresolved)
    LabourWelfareFund <- (unresolved)
    "#);
}
