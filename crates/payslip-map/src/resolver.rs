//! Header resolution.
//!
//! Matching is a case-insensitive exact comparison between each field's
//! alias list and the register headers. Aliases are tried in priority
//! order and the first hit wins; no fuzzy matching is attempted, because
//! the register is a fixed corporate template and a silent near-miss is
//! worse than an unresolved field.

use std::collections::{BTreeMap, HashMap};

use payslip_model::Field;

use crate::types::{ColumnMap, ResolvedColumn};

/// Resolve register headers to canonical fields.
///
/// Duplicate headers that only differ in case collapse to the last
/// occurrence, mirroring how the header lookup is built.
#[must_use]
pub fn resolve_columns(headers: &[String]) -> ColumnMap {
    let mut by_lowercase: HashMap<String, usize> = HashMap::new();
    for (index, header) in headers.iter().enumerate() {
        by_lowercase.insert(header.trim().to_lowercase(), index);
    }

    let mut entries = BTreeMap::new();
    for field in Field::ALL {
        for alias in field.aliases() {
            if let Some(&index) = by_lowercase.get(&alias.to_lowercase()) {
                entries.insert(
                    field,
                    ResolvedColumn {
                        header: headers[index].clone(),
                        index,
                    },
                );
                break;
            }
        }
    }
    ColumnMap::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_headers_resolve_nothing() {
        let map = resolve_columns(&[]);
        assert_eq!(map.resolved_count(), 0);
    }

    #[test]
    fn trailing_whitespace_in_header_still_matches() {
        let headers = vec!["Employee Name  ".to_string()];
        let map = resolve_columns(&headers);
        assert!(map.is_resolved(Field::EmployeeName));
    }
}
