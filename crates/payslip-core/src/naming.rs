//! Archive and entry naming.

use chrono::NaiveDateTime;

/// Reduce a month label to archive-name-safe characters.
///
/// Keeps alphanumerics, spaces and underscores, then replaces spaces with
/// underscores, so "August 2025" becomes "August_2025" and punctuation
/// like "Aug/25!" collapses to "Aug25".
#[must_use]
pub fn sanitize_month(month: &str) -> String {
    month
        .chars()
        .filter(|ch| ch.is_alphanumeric() || *ch == ' ' || *ch == '_')
        .collect::<String>()
        .replace(' ', "_")
}

/// File name of the run's archive, unique per run via the timestamp.
#[must_use]
pub fn archive_file_name(month: &str, stamp: NaiveDateTime) -> String {
    format!(
        "Payslips_{}_{}.zip",
        sanitize_month(month),
        stamp.format("%Y%m%d_%H%M%S")
    )
}

/// Archive entry name for one employee's payslip.
///
/// A blank name falls back to "Unknown"; the employee code is expected to
/// already carry its `row<N>` fallback from normalization, which is what
/// keeps entries for code-less rows distinct.
#[must_use]
pub fn entry_name(ecode: &str, employee_name: &str) -> String {
    let name = employee_name.trim();
    let name = if name.is_empty() { "Unknown" } else { name };
    let safe_name = name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("Payslip_{ecode}_{safe_name}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 31)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap()
    }

    #[test]
    fn archive_name_embeds_sanitized_month_and_timestamp() {
        assert_eq!(
            archive_file_name("August 2025", stamp()),
            "Payslips_August_2025_20250831_140509.zip"
        );
        assert_eq!(
            archive_file_name("Aug/25!", stamp()),
            "Payslips_Aug25_20250831_140509.zip"
        );
    }

    #[test]
    fn entry_name_replaces_spaces_in_the_employee_name() {
        assert_eq!(
            entry_name("E042", "Asha  Rao"),
            "Payslip_E042_Asha_Rao.pdf"
        );
    }

    #[test]
    fn blank_name_falls_back_to_unknown() {
        assert_eq!(entry_name("row4", "  "), "Payslip_row4_Unknown.pdf");
    }
}
