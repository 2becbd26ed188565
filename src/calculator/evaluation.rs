//! Arithmetic for a single pending operation.
//!
//! Parses operands from the literal text the user typed, applies the
//! operation and rounds the result to suppress binary floating-point noise.

use super::error::CalcError;
use super::event::Operation;

/// Results are rounded to this many decimal places.
const ROUNDING_SCALE: f64 = 1e8;

/// Parse the literal text of an operand.
///
/// Accepts everything the keypad can produce, including a trailing decimal
/// point (`"3."`) and exponent forms (`"1e-7"`).
pub fn parse_operand(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Evaluate `lhs op rhs`, where `rhs` is still the literal operand text.
pub fn evaluate(lhs: f64, op: Operation, rhs: &str) -> Result<f64, CalcError> {
    let rhs = parse_operand(rhs).ok_or(CalcError::InvalidInput)?;
    if lhs.is_nan() {
        return Err(CalcError::InvalidInput);
    }

    if op == Operation::Divide && rhs == 0.0 {
        return Err(CalcError::DivideByZero);
    }

    let result = round_result(op.apply(lhs, rhs));
    if !result.is_finite() {
        return Err(CalcError::ResultTooLarge);
    }

    Ok(result)
}

/// Round to 8 decimal places, halves rounding towards positive infinity.
fn round_result(value: f64) -> f64 {
    ((value + f64::EPSILON) * ROUNDING_SCALE + 0.5).floor() / ROUNDING_SCALE
}

/// Format a number as operand text.
///
/// Uses the shortest representation that round-trips. Very large and very
/// small magnitudes switch to exponent form with an explicit sign.
pub fn number_to_string(value: f64) -> String {
    if value == 0.0 {
        // Also covers -0.0
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        }
    } else {
        format!("{}", value)
    }
}
