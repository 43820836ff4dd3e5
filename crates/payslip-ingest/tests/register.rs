use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use payslip_ingest::{IngestError, read_register};

fn write_csv(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Sheet1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
</Relationships>"#;

/// Assemble a single-sheet xlsx fixture around the given sheet XML.
fn write_xlsx(dir: &tempfile::TempDir, name: &str, sheet_xml: &str) -> PathBuf {
    let path = dir.path().join(name);
    let file = fs::File::create(&path).expect("create fixture");
    let mut archive = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/worksheets/sheet1.xml", sheet_xml),
    ];
    for (part, xml) in parts {
        archive.start_file(part, options).expect("start part");
        archive.write_all(xml.as_bytes()).expect("write part");
    }
    archive.finish().expect("finish fixture");
    path
}

#[test]
fn reads_rows_below_the_fixed_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "register.csv",
        "ACME CORP,,\n\
         Salary Register,,\n\
         Employee Name,E code,Basic\n\
         Asha Rao , E042 ,18000\n\
         Vikram Singh,E043,21000\n",
    );

    let register = read_register(&path).expect("read register");
    assert_eq!(register.headers, vec!["Employee Name", "E code", "Basic"]);
    assert_eq!(register.rows.len(), 2);
    assert_eq!(register.rows[0].line, 4);
    assert_eq!(register.rows[0].cells, vec!["Asha Rao", "E042", "18000"]);
    assert_eq!(register.rows[1].line, 5);
}

#[test]
fn blank_rows_are_preserved_with_their_position() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "register.csv",
        ",,\n\
         ,,\n\
         Employee Name,E code,Basic\n\
         ,,\n\
         Vikram Singh,E043,21000\n",
    );

    let register = read_register(&path).expect("read register");
    assert_eq!(register.rows.len(), 2);
    assert!(register.rows[0].cells.iter().all(String::is_empty));
    assert_eq!(register.rows[0].line, 4);
    assert_eq!(register.rows[1].line, 5);
}

#[test]
fn ragged_rows_are_kept_as_is() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(
        &dir,
        "register.csv",
        "banner\n\
         banner\n\
         Employee Name,E code,Basic\n\
         Asha Rao\n",
    );

    let register = read_register(&path).expect("read register");
    assert_eq!(register.rows[0].cells, vec!["Asha Rao"]);
}

#[test]
fn reads_workbook_rows_below_the_fixed_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_xlsx(
        &dir,
        "register.xlsx",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="1"><c r="A1" t="inlineStr"><is><t>ACME CORP</t></is></c></row>
<row r="2"><c r="A2" t="inlineStr"><is><t>Salary Register</t></is></c></row>
<row r="3">
<c r="A3" t="inlineStr"><is><t>Employee Name</t></is></c>
<c r="B3" t="inlineStr"><is><t>E code</t></is></c>
<c r="C3" t="inlineStr"><is><t>Basic</t></is></c>
</row>
<row r="4">
<c r="A4" t="inlineStr"><is><t> Asha Rao </t></is></c>
<c r="B4" t="inlineStr"><is><t>E042</t></is></c>
<c r="C4"><v>18000</v></c>
</row>
</sheetData>
</worksheet>"#,
    );

    let register = read_register(&path).expect("read register");
    assert_eq!(register.headers, vec!["Employee Name", "E code", "Basic"]);
    assert_eq!(register.rows.len(), 1);
    assert_eq!(register.rows[0].line, 4);
    // Numeric cells read back as plain decimals, not "18000.0".
    assert_eq!(register.rows[0].cells, vec!["Asha Rao", "E042", "18000"]);
}

#[test]
fn workbook_range_not_anchored_at_row_one_keeps_physical_lines() {
    // Row 1 is entirely empty, so the used range starts at physical row 2
    // and the loader must still find the header on physical row 3.
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_xlsx(
        &dir,
        "register.xlsx",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="2"><c r="A2" t="inlineStr"><is><t>Salary Register</t></is></c></row>
<row r="3">
<c r="A3" t="inlineStr"><is><t>Employee Name</t></is></c>
<c r="B3" t="inlineStr"><is><t>Basic</t></is></c>
</row>
<row r="4">
<c r="A4" t="inlineStr"><is><t>Vikram Singh</t></is></c>
<c r="B4"><v>21000</v></c>
</row>
</sheetData>
</worksheet>"#,
    );

    let register = read_register(&path).expect("read register");
    assert_eq!(register.headers, vec!["Employee Name", "Basic"]);
    assert_eq!(register.rows.len(), 1);
    assert_eq!(register.rows[0].line, 4);
    assert_eq!(register.rows[0].cells, vec!["Vikram Singh", "21000"]);
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = read_register(&dir.path().join("nope.csv"));
    assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn short_file_is_missing_the_header_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_csv(&dir, "register.csv", "only one row\n");
    let result = read_register(&path);
    assert!(matches!(
        result,
        Err(IngestError::MissingHeaderRow { expected: 3, rows: 1 })
    ));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("register.ods");
    fs::write(&path, "whatever").expect("write fixture");
    let result = read_register(&path);
    assert!(matches!(
        result,
        Err(IngestError::UnsupportedFormat { extension }) if extension == "ods"
    ));
}
