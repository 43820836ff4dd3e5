use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use payslip_model::Field;

/// The register column a canonical field resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedColumn {
    /// Header text exactly as it appears in the register.
    pub header: String,
    /// Zero-based column index within the header row.
    pub index: usize,
}

/// Immutable result of resolving one register's headers against the
/// canonical field set. Fields without a matching column are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMap {
    entries: BTreeMap<Field, ResolvedColumn>,
}

impl ColumnMap {
    pub(crate) fn new(entries: BTreeMap<Field, ResolvedColumn>) -> Self {
        Self { entries }
    }

    /// Returns the resolved column for a field, if any header matched.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ResolvedColumn> {
        self.entries.get(&field)
    }

    /// Returns true if the field resolved to a column.
    #[must_use]
    pub fn is_resolved(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    /// Number of canonical fields that found a column.
    #[must_use]
    pub fn resolved_count(&self) -> usize {
        self.entries.len()
    }

    /// Looks up a field's raw cell within one row. Returns `None` when the
    /// field is unresolved or the row is shorter than the resolved index.
    #[must_use]
    pub fn value<'a>(&self, field: Field, cells: &'a [String]) -> Option<&'a str> {
        let column = self.entries.get(&field)?;
        cells.get(column.index).map(String::as_str)
    }

    /// Multi-line rendering of the map for diagnostic logging.
    #[must_use]
    pub fn describe(&self) -> String {
        let mut out = String::new();
        for field in Field::ALL {
            match self.entries.get(&field) {
                Some(column) => {
                    let _ = writeln!(
                        out,
                        "{} <- {:?} (column {})",
                        field, column.header, column.index
                    );
                }
                None => {
                    let _ = writeln!(out, "{field} <- (unresolved)");
                }
            }
        }
        out
    }
}
