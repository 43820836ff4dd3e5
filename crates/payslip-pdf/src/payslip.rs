//! The fixed A4 payslip layout.
//!
//! Every coordinate is an absolute page position in points, tuned to the
//! corporate payslip template: bordered frame, company header, identity
//! box, payment box, the earnings/deductions ledger and the net-pay
//! footer. Rendering is pure: same header and record in, same bytes out.

use pdf_writer::{Name, Pdf, Rect, Ref};

use payslip_model::{EmployeeRecord, RunHeader};
use payslip_transform::money;

use crate::canvas::{Canvas, FONT_NAME};
use crate::metrics::string_width;

const MM: f32 = 2.834_646;
const PAGE_W: f32 = 595.275_6;
const PAGE_H: f32 = 841.889_8;
const MARGIN: f32 = 12.0 * MM;

/// Render one employee's payslip as a complete single-page PDF.
#[must_use]
pub fn render_payslip(header: &RunHeader, record: &EmployeeRecord) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let catalog_id = Ref::new(1);
    let pages_id = Ref::new(2);
    let page_id = Ref::new(3);
    let font_id = Ref::new(4);
    let content_id = Ref::new(5);

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id).kids([page_id]).count(1);
    {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .parent(pages_id)
            .contents(content_id);
        page.resources().fonts().pair(Name(FONT_NAME), font_id);
    }
    pdf.type1_font(font_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    // The content stream stays uncompressed: one-page slips are small and
    // the raw stream can be inspected directly in tests.
    let content = draw_page(header, record);
    pdf.stream(content_id, &content);

    pdf.finish()
}

fn draw_page(header: &RunHeader, record: &EmployeeRecord) -> Vec<u8> {
    let mut c = Canvas::new();

    // Outer frame.
    c.set_line_width(2.0);
    c.stroke_rect(MARGIN, MARGIN, PAGE_W - 2.0 * MARGIN, PAGE_H - 2.0 * MARGIN);

    // Company name and wrapped address, both centered.
    let top_y = PAGE_H - MARGIN - 26.0;
    c.set_font_size(18.0);
    c.set_fill_rgb(0.0, 116.0 / 255.0, 217.0 / 255.0);
    c.draw_centred_string(PAGE_W / 2.0, top_y, &header.company);
    c.set_font_size(9.0);
    c.set_fill_black();
    let addr_width = PAGE_W - 2.0 * (MARGIN + 40.0);
    for (i, line) in wrap_to_width(&header.address, 9.0, addr_width).iter().enumerate() {
        c.draw_centred_string(PAGE_W / 2.0, top_y - 14.0 - i as f32 * 11.0, line);
    }

    c.set_font_size(10.0);
    c.draw_string(
        MARGIN + 6.0,
        top_y - 36.0,
        &format!("Payslip for the Month :  {}", header.month),
    );

    // Identity box, split 61/39 into label/value column pairs.
    let box_x = MARGIN + 6.0;
    let box_w = PAGE_W - 2.0 * (MARGIN + 6.0);
    let box_top = top_y - 46.0;
    let box_h = 80.0;
    c.set_line_width(1.0);
    c.stroke_rect(box_x, box_top - box_h, box_w, box_h);
    let left_w = box_w * 0.61;
    c.line(box_x + left_w, box_top - box_h, box_x + left_w, box_top);

    c.set_font_size(9.0);
    let x_left = box_x + 8.0;
    let left_rows = [
        ("Employee Name", record.employee_name.as_str()),
        ("E code", record.ecode.as_str()),
        ("Designation", record.designation.as_str()),
        ("Department", record.department.as_str()),
        ("Father / Husband Name", record.father_name.as_str()),
        ("DOB", record.dob.as_str()),
    ];
    let mut y = box_top - 14.0;
    for (label, value) in left_rows {
        c.draw_string(x_left, y, label);
        c.draw_string(x_left + 110.0, y, value);
        y -= 12.0;
    }

    // The right column prints the run's work location, not the per-row one.
    let rx = box_x + left_w + 11.0;
    let right_rows = [
        ("Location", header.location.as_str()),
        ("UAN", record.uan.as_str()),
        ("Esi No", record.esi_no.as_str()),
        ("PAN No", record.pan_no.as_str()),
        ("DOJ", record.doj.as_str()),
    ];
    let mut ry = box_top - 14.0;
    for (label, value) in right_rows {
        c.draw_string(rx, ry, label);
        c.draw_string(rx + 70.0, ry, value);
        ry -= 12.0;
    }

    // Payment and leave balances box.
    let pl_top = box_top - box_h - 8.0;
    let pl_h = 70.0;
    c.stroke_rect(box_x, pl_top - pl_h, box_w, pl_h);
    c.draw_string(box_x + 6.0, pl_top - 14.0, "PAYMENT & LEAVE BALANCES");
    c.draw_right_string(
        box_x + box_w * 0.80 + 8.0,
        pl_top - 14.0,
        &format!("Paid Days  {}    LOP  {}", record.paid_days, record.lop),
    );
    c.draw_string(box_x + 6.0, pl_top - 30.0, "Pay Mode");
    c.draw_string(box_x + 66.0, pl_top - 30.0, &record.pay_mode);
    c.draw_string(box_x + 6.0, pl_top - 46.0, "Bank name");
    c.draw_string(box_x + 66.0, pl_top - 46.0, &record.bank_name);
    c.draw_string(box_x + 6.0, pl_top - 62.0, "Account No");
    c.draw_string(box_x + 66.0, pl_top - 62.0, &record.account_no);

    // Earnings/deductions ledger with a shaded header band.
    let ed_top = pl_top - pl_h - 10.0;
    let ed_h = 220.0;
    c.stroke_rect(box_x, ed_top - ed_h, box_w, ed_h);
    let band_h = 18.0;
    c.set_fill_rgb(0x7f as f32 / 255.0, 0xb0 as f32 / 255.0, 0xd6 as f32 / 255.0);
    c.fill_rect(box_x, ed_top - band_h, box_w, band_h);
    c.set_fill_black();
    c.set_font_size(10.0);
    c.draw_string(box_x + 8.0, ed_top - band_h + 4.0, "Earnings");
    c.draw_string(box_x + box_w * 0.53, ed_top - band_h + 4.0, "Amount");
    c.draw_string(box_x + box_w * 0.62 + 8.0, ed_top - band_h + 4.0, "Deduction");
    c.draw_string(box_x + box_w - 52.0, ed_top - band_h + 4.0, "Amount");

    let left_col_x = box_x + 8.0;
    let amt_x = box_x + box_w * 0.48 + 60.0;
    let ded_col_x = box_x + box_w * 0.62 + 8.0;
    let ded_amt_x = box_x + box_w - 20.0;

    c.set_font_size(9.0);
    let earnings = [
        ("Basic", record.basic),
        ("Special Allowance", record.special_allowance),
        ("Travel Allowance", record.travel_allowance),
        ("House Rent Allowance", record.hra),
        ("NH/FH", record.nh_fh),
        ("Reimbursement", record.reimbursement),
    ];
    let mut y_row = ed_top - band_h - 12.0;
    for (label, value) in earnings {
        c.draw_string(left_col_x, y_row, label);
        c.draw_right_string(amt_x, y_row, &money(value));
        y_row -= 14.0;
    }

    let deductions = [
        ("EPF", record.epf),
        ("ESI", record.esi),
        ("PT", record.pt),
        ("TDS", record.tds),
        ("Adv/Other", record.adv_other),
        ("Labour Welfare Fund", record.labour_welfare_fund),
    ];
    let mut dy = ed_top - band_h - 12.0;
    for (label, value) in deductions {
        c.draw_string(ded_col_x, dy, label);
        c.draw_right_string(ded_amt_x, dy, &money(value));
        dy -= 14.0;
    }

    c.set_font_size(10.0);
    c.draw_string(left_col_x, ed_top - ed_h + 12.0, "Gross Earnings");
    c.draw_right_string(amt_x, ed_top - ed_h + 12.0, &money(record.gross()));
    c.draw_string(ded_col_x, ed_top - ed_h + 12.0, "Total Deductions");
    c.draw_right_string(ded_amt_x, ed_top - ed_h + 12.0, &money(record.total_deductions()));

    // Grid lines delimiting the header band, body and totals footer.
    c.set_line_width(0.5);
    c.line(box_x, ed_top, box_x, ed_top - ed_h);
    c.line(amt_x + 8.0, ed_top, amt_x + 8.0, ed_top - ed_h);
    c.line(box_x + box_w, ed_top, box_x + box_w, ed_top - ed_h);
    c.line(box_x, ed_top, box_x + box_w, ed_top);
    c.line(box_x, ed_top - band_h, box_x + box_w, ed_top - band_h);
    c.line(box_x, ed_top - ed_h + 25.0, box_x + box_w, ed_top - ed_h + 25.0);

    // Net-pay footer and foot identity line.
    let footer_y = ed_top - ed_h - 28.0;
    c.set_line_width(1.5);
    c.line(box_x, footer_y + 28.0, box_x + box_w, footer_y + 28.0);
    c.set_font_size(12.0);
    c.draw_string(
        box_x + 10.0,
        footer_y + 8.0,
        &format!("Total Net Payable Rs.{}/-", money(record.net())),
    );
    c.set_font_size(8.0);
    c.draw_right_string(
        box_x + box_w - 10.0,
        footer_y + 8.0,
        "(Net Payable = Gross Earnings - Total Deductions)",
    );
    c.draw_string(
        box_x + 10.0,
        MARGIN + 8.0,
        &format!(
            "Employee: {}   Ecode: {}",
            record.employee_name, record.ecode
        ),
    );

    c.finish()
}

/// Break text into lines no wider than `max_width` at the given size.
///
/// Greedy word wrap against measured widths; a single word wider than the
/// limit still gets its own line rather than being split.
fn wrap_to_width(text: &str, size: f32, max_width: f32) -> Vec<String> {
    let mut words = text.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };
    let mut lines = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{current} {word}");
        if string_width(&candidate, size) <= max_width {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    lines.push(current);
    lines
}
