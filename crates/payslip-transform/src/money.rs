//! Money formatting for payslip amounts.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Format an amount with two decimal places and comma-grouped thousands.
///
/// Values a decimal cannot represent (NaN, infinities) render as "0.00";
/// an amount cell never fails a payslip.
#[must_use]
pub fn money(value: f64) -> String {
    let Some(decimal) = Decimal::from_f64(value) else {
        return "0.00".to_string();
    };
    let rounded = decimal.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (text.as_str(), ""),
    };
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);
    for _ in frac_part.len()..2 {
        out.push('0');
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_to_two_decimals() {
        assert_eq!(money(1234.5), "1,234.50");
        assert_eq!(money(0.0), "0.00");
        assert_eq!(money(7.0), "7.00");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(money(1234567.89), "1,234,567.89");
        assert_eq!(money(100.0), "100.00");
        assert_eq!(money(1000.0), "1,000.00");
        assert_eq!(money(999999.99), "999,999.99");
    }

    #[test]
    fn negative_amounts_keep_grouping() {
        assert_eq!(money(-1234.5), "-1,234.50");
        assert_eq!(money(-12.0), "-12.00");
    }

    #[test]
    fn unrepresentable_values_render_zero() {
        assert_eq!(money(f64::NAN), "0.00");
        assert_eq!(money(f64::INFINITY), "0.00");
        assert_eq!(money(f64::NEG_INFINITY), "0.00");
    }

    #[test]
    fn midpoints_round_to_the_even_cent() {
        assert_eq!(money(10.005), "10.00");
        assert_eq!(money(2.675), "2.68");
        assert_eq!(money(0.125), "0.12");
        assert_eq!(money(0.135), "0.14");
    }
}
