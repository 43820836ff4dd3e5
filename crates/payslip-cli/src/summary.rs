use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use payslip_core::RunSummary;

/// Print the run outcome after the log has already told the full story.
pub fn print_summary(summary: &RunSummary) {
    println!("Archive: {}", summary.archive_path.display());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Payslips"),
        header_cell("Blank rows"),
        header_cell("Failed rows"),
    ]);
    for index in 0..3 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.add_row(vec![
        Cell::new(summary.documents)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        dim_or_plain(summary.rows_skipped, Color::DarkGrey),
        dim_or_plain(summary.rows_failed, Color::Red),
    ]);
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Zero counts render dim; non-zero counts take the signal color.
fn dim_or_plain(count: usize, color: Color) -> Cell {
    if count == 0 {
        Cell::new(count).fg(Color::DarkGrey)
    } else {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    }
}
