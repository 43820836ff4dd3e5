//! Salary register loading.
//!
//! Registers follow a fixed corporate template: two banner rows, the
//! column header row on physical row 3, then one employee per row. The
//! loader reduces both Excel workbooks and CSV exports to the same plain
//! string table; all interpretation of the values happens downstream.

use std::path::Path;

use calamine::{Data, DataType as _, Reader as _, open_workbook_auto};
use chrono::NaiveTime;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{IngestError, Result};

/// Physical (1-based) row carrying the column headers.
pub const HEADER_ROW: u32 = 3;

/// One register row together with its physical position in the file.
///
/// The position survives normalization so downstream fallbacks and
/// diagnostics can point at the exact row a value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterRow {
    /// 1-based physical row number in the source file.
    pub line: u32,
    pub cells: Vec<String>,
}

/// A salary register reduced to trimmed strings.
#[derive(Debug, Clone, Default)]
pub struct Register {
    pub headers: Vec<String>,
    /// Data rows in file order, starting after the header row. Blank rows
    /// are preserved so physical numbering stays intact.
    pub rows: Vec<RegisterRow>,
}

/// Load a salary register from disk, dispatching on the file extension.
///
/// # Errors
///
/// Fails when the file is missing, has an unsupported extension, cannot
/// be parsed, or is too short to contain the fixed header row.
pub fn read_register(path: &Path) -> Result<Register> {
    if !path.exists() {
        return Err(IngestError::file_not_found(path));
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let raw = match extension.as_str() {
        "xlsx" | "xlsm" | "xlsb" | "xls" => read_workbook_rows(path)?,
        "csv" => read_csv_rows(path)?,
        _ => {
            return Err(IngestError::UnsupportedFormat { extension });
        }
    };
    let register = split_at_header(raw)?;
    debug!(
        path = %path.display(),
        headers = register.headers.len(),
        rows = register.rows.len(),
        "loaded salary register table"
    );
    Ok(register)
}

/// Split raw rows into headers and data at the fixed header position.
fn split_at_header(raw: Vec<RegisterRow>) -> Result<Register> {
    let total = raw.len();
    let mut headers = None;
    let mut rows = Vec::new();
    for row in raw {
        if headers.is_none() {
            // Banner rows above the header are dropped here.
            if row.line == HEADER_ROW {
                headers = Some(row.cells);
            }
            continue;
        }
        rows.push(row);
    }
    match headers {
        Some(headers) => Ok(Register { headers, rows }),
        None => Err(IngestError::MissingHeaderRow {
            expected: HEADER_ROW,
            rows: total,
        }),
    }
}

fn read_workbook_rows(path: &Path) -> Result<Vec<RegisterRow>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::empty_workbook(path))??;
    // The range starts at the first used cell, not necessarily at A1.
    let first_line = range.start().map_or(0, |(row, _)| row) + 1;
    let rows = range
        .rows()
        .enumerate()
        .map(|(index, cells)| RegisterRow {
            line: first_line + index as u32,
            cells: cells.iter().map(cell_to_string).collect(),
        })
        .collect();
    Ok(rows)
}

fn read_csv_rows(path: &Path) -> Result<Vec<RegisterRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map_or(index as u32 + 1, |position| position.line() as u32);
        rows.push(RegisterRow {
            line,
            cells: record.iter().map(normalize_cell).collect(),
        });
    }
    Ok(rows)
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Render a workbook cell as the string the rest of the pipeline sees.
///
/// Numeric cells use the shortest plain-decimal rendering, so a serial
/// like 123456 never grows a spurious ".0". Error cells read as blank.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => normalize_cell(s),
        Data::Float(f) => format!("{f}"),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) => serial_datetime_string(cell),
        Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_cell(s),
    }
}

fn serial_datetime_string(cell: &Data) -> String {
    match cell.as_datetime() {
        Some(dt) if dt.time() == NaiveTime::MIN => dt.format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => String::new(),
    }
}
