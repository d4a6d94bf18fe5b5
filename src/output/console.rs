//! Console rendering of sink totals.
//!
//! Totals print as `InInterest: <total>` and `OutInterest: <total>`.
//! Two float renderings are supported, see `FloatStyle`.

use crate::aggregator::SinkKind;
use crate::utils::config::{FloatStyle, LEGACY_SIGNIFICANT_DIGITS};

/// Render one total in the requested style
///
/// Both styles always show a decimal point for finite whole numbers
/// (`2.0`), spell non-finite values `nan`/`inf`/`-inf`, and write
/// exponents with an explicit sign and at least two digits (`1e+16`).
pub fn format_total(value: f64, style: FloatStyle) -> String {
    if !value.is_finite() {
        return non_finite(value).to_string();
    }

    match style {
        FloatStyle::Shortest => normalize_exponent(&format!("{:?}", value)),
        FloatStyle::Legacy => format_significant(value, LEGACY_SIGNIFICANT_DIGITS),
    }
}

/// The two console lines for a pair of totals
pub fn render_totals(in_total: f64, out_total: f64, style: FloatStyle) -> String {
    format!(
        "{}: {}\n{}: {}\n",
        SinkKind::In.console_label(),
        format_total(in_total, style),
        SinkKind::Out.console_label(),
        format_total(out_total, style)
    )
}

/// Print both totals to stdout
pub fn print_totals(in_total: f64, out_total: f64, style: FloatStyle) {
    print!("{}", render_totals(in_total, out_total, style));
}

fn non_finite(value: f64) -> &'static str {
    if value.is_nan() {
        "nan"
    } else if value.is_sign_negative() {
        "-inf"
    } else {
        "inf"
    }
}

/// `%.{digits}g`, plus `.0` when the result reads as an integer
fn format_significant(value: f64, digits: usize) -> String {
    if value == 0.0 {
        let zero = if value.is_sign_negative() { "-0.0" } else { "0.0" };
        return zero.to_string();
    }

    // Rounding to `digits` significant digits decides the exponent
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = trim_fraction(mantissa);
        return format_exponent(mantissa, exponent);
    }

    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let fixed = trim_fraction(&fixed);

    if fixed.contains('.') {
        fixed.to_string()
    } else {
        format!("{}.0", fixed)
    }
}

/// Drop trailing zeros after a decimal point, and the point if bare
fn trim_fraction(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }
    number.trim_end_matches('0').trim_end_matches('.')
}

/// Rewrite Rust's `1e16` / `1.5e-5` as `1e+16` / `1.5e-05`
fn normalize_exponent(rendered: &str) -> String {
    match rendered.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exponent) => format_exponent(mantissa, exponent),
            Err(_) => rendered.to_string(),
        },
        None => rendered.to_string(),
    }
}

fn format_exponent(mantissa: &str, exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_shortest_whole_and_fraction() {
        assert_eq!(format_total(0.0, FloatStyle::Shortest), "0.0");
        assert_eq!(format_total(2.0, FloatStyle::Shortest), "2.0");
        assert_eq!(format_total(3.5, FloatStyle::Shortest), "3.5");
        assert_eq!(format_total(1234567.0, FloatStyle::Shortest), "1234567.0");
    }

    #[test]
    fn test_shortest_keeps_full_precision() {
        assert_eq!(
            format_total(0.1 + 0.2, FloatStyle::Shortest),
            "0.30000000000000004"
        );
    }

    #[test]
    fn test_shortest_exponents() {
        assert_eq!(format_total(1e16, FloatStyle::Shortest), "1e+16");
        assert_eq!(format_total(1.5e-5, FloatStyle::Shortest), "1.5e-05");
    }

    #[test]
    fn test_legacy_rounds_to_twelve_digits() {
        assert_eq!(format_total(0.1 + 0.2, FloatStyle::Legacy), "0.3");
        assert_eq!(format_total(2.0 / 3.0, FloatStyle::Legacy), "0.666666666667");
        assert_eq!(format_total(3.5, FloatStyle::Legacy), "3.5");
        assert_eq!(format_total(42.0, FloatStyle::Legacy), "42.0");
        assert_eq!(format_total(0.0, FloatStyle::Legacy), "0.0");
    }

    #[test]
    fn test_legacy_exponents() {
        assert_eq!(format_total(1e16, FloatStyle::Legacy), "1e+16");
        assert_eq!(
            format_total(123456789012345.0, FloatStyle::Legacy),
            "1.23456789012e+14"
        );
        assert_eq!(format_total(0.00001, FloatStyle::Legacy), "1e-05");
        assert_eq!(format_total(0.0001, FloatStyle::Legacy), "0.0001");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_total(f64::NAN, FloatStyle::Shortest), "nan");
        assert_eq!(format_total(f64::INFINITY, FloatStyle::Legacy), "inf");
        assert_eq!(format_total(f64::NEG_INFINITY, FloatStyle::Shortest), "-inf");
    }

    #[test]
    fn test_render_totals() {
        assert_eq!(
            render_totals(3.5, 2.0, FloatStyle::Shortest),
            "InInterest: 3.5\nOutInterest: 2.0\n"
        );
    }
}
