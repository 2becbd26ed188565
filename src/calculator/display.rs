//! Display formatting for the calculator screen.

use super::evaluation::{number_to_string, parse_operand};

/// Maximum number of characters the display can show.
pub const DISPLAY_WIDTH: usize = 12;

/// Magnitudes at or above this render in exponential notation.
const EXPONENTIAL_THRESHOLD: f64 = 1e10;

/// Magnitudes at or above this render with thousand separators.
const GROUPING_THRESHOLD: f64 = 1_000_000.0;

/// Format the literal operand text for display.
///
/// Text that is not a number (the `Error` sentinel) is shown as is. The
/// result is cut to [`DISPLAY_WIDTH`] characters without rounding.
pub fn format_display(text: &str) -> String {
    let formatted = match parse_operand(text) {
        Some(value) if value.abs() >= EXPONENTIAL_THRESHOLD => format_exponential(value),
        Some(value) if value.abs() >= GROUPING_THRESHOLD => format_grouped(value),
        Some(value) => number_to_string(value),
        None => text.to_string(),
    };

    truncate(formatted, DISPLAY_WIDTH)
}

/// Exponential notation with five fractional digits, e.g. `1.23457e+10`.
fn format_exponential(value: f64) -> String {
    let (digits, exponent) = decimal_digits(value);
    let (mut digits, exponent) = round_half_up(digits, exponent, 6);
    digits.resize(6, 0);

    let sign = if value < 0.0 { "-" } else { "" };
    let exponent_sign = if exponent < 0 { "-" } else { "+" };
    format!(
        "{}{}.{}e{}{}",
        sign,
        digits[0],
        digits_to_string(&digits[1..]),
        exponent_sign,
        exponent.abs()
    )
}

/// Thousand separators with at most two fractional digits, trailing zeros
/// dropped.
fn format_grouped(value: f64) -> String {
    let (digits, exponent) = decimal_digits(value);
    let keep = (exponent + 3).max(1) as usize;
    let (mut digits, exponent) = round_half_up(digits, exponent, keep);

    let int_len = (exponent + 1).max(0) as usize;
    digits.resize(int_len + 2, 0);
    let int_part = digits_to_string(&digits[..int_len]);
    let dec_part = digits_to_string(&digits[int_len..]);
    let dec_part = dec_part.trim_end_matches('0');

    let sign = if value < 0.0 { "-" } else { "" };
    if dec_part.is_empty() {
        format!("{}{}", sign, format_with_separators(&int_part))
    } else {
        format!("{}{}.{}", sign, format_with_separators(&int_part), dec_part)
    }
}

/// Shortest round-trip digits of `|value|` and its decimal exponent, so that
/// `|value| = d0.d1d2... × 10^exponent`.
fn decimal_digits(value: f64) -> (Vec<u8>, i32) {
    let formatted = format!("{:e}", value.abs());
    let (mantissa, exponent) = formatted
        .split_once('e')
        .unwrap_or((formatted.as_str(), "0"));
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    (digits, exponent.parse().unwrap_or(0))
}

/// Keep `keep` significant digits, rounding ties away from zero.
///
/// A carry out of the leading digit bumps the exponent.
fn round_half_up(mut digits: Vec<u8>, mut exponent: i32, keep: usize) -> (Vec<u8>, i32) {
    if digits.len() <= keep {
        return (digits, exponent);
    }

    let round_up = digits[keep] >= 5;
    digits.truncate(keep);
    if !round_up {
        return (digits, exponent);
    }

    for digit in digits.iter_mut().rev() {
        if *digit < 9 {
            *digit += 1;
            return (digits, exponent);
        }
        *digit = 0;
    }

    // Every kept digit was a nine
    digits.insert(0, 1);
    digits.truncate(keep);
    exponent += 1;
    (digits, exponent)
}

fn digits_to_string(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Insert a comma between every group of three digits.
fn format_with_separators(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

fn truncate(mut text: String, width: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(width) {
        text.truncate(idx);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_passthrough() {
        assert_eq!(format_display("Error"), "Error");
    }

    #[test]
    fn test_small_numbers() {
        assert_eq!(format_display("0"), "0");
        assert_eq!(format_display("12.50"), "12.5");
        assert_eq!(format_display("0."), "0");
        assert_eq!(format_display("-42"), "-42");
        assert_eq!(format_display("999999"), "999999");
    }

    #[test]
    fn test_thousand_separators() {
        assert_eq!(format_display("1000000"), "1,000,000");
        assert_eq!(format_display("1234567.891"), "1,234,567.89");
        assert_eq!(format_display("1234567.5"), "1,234,567.5");
        assert_eq!(format_display("-2500000"), "-2,500,000");
    }

    #[test]
    fn test_exponential() {
        assert_eq!(format_display("12345678901"), "1.23457e+10");
        assert_eq!(format_display("10000000000"), "1.00000e+10");
        assert_eq!(format_display("-12345678901"), "-1.23457e+10");
    }

    #[test]
    fn test_ties_round_up() {
        assert_eq!(format_display("1234567.125"), "1,234,567.13");
        assert_eq!(format_display("12345650000"), "1.23457e+10");
        assert_eq!(format_display("10000050000"), "1.00001e+10");
        assert_eq!(format_display("-1234567.125"), "-1,234,567.1");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(format_display("99999950000"), "1.00000e+11");
        assert_eq!(format_display("9999999.999"), "10,000,000");
        assert_eq!(format_display("1999999.995"), "2,000,000");
    }

    #[test]
    fn test_truncates_to_display_width() {
        // Grouped form is 13 characters before truncation
        assert_eq!(format_display("1234567.25"), "1,234,567.25");
        assert_eq!(format_display("123456789.25"), "123,456,789.");
        assert_eq!(format_display("0.12345678901"), "0.1234567890");
        assert_eq!(format_display("-0.12345678901").len(), DISPLAY_WIDTH);
    }
}
