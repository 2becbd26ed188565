//! Input events understood by the calculator engine.

use serde::Serialize;
use std::fmt;

/// A single decimal digit, `0` through `9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value. Returns `None` above 9.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Create a digit from an ASCII character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// The numeric value of the digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The ASCII character for the digit.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A binary arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Parse an operator symbol. Accepts both ASCII and typographic forms.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" | "−" => Some(Self::Subtract),
            "*" | "x" | "X" | "×" => Some(Self::Multiply),
            "/" | "÷" => Some(Self::Divide),
            _ => None,
        }
    }

    /// The symbol shown on the calculator keypad.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operation to two operands without any error checking.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A discrete input event fed to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InputEvent {
    Digit(Digit),
    DecimalPoint,
    Operation(Operation),
    Equals,
    Clear,
    ToggleSign,
    Percentage,
}

impl From<Digit> for InputEvent {
    fn from(digit: Digit) -> Self {
        Self::Digit(digit)
    }
}

impl From<Operation> for InputEvent {
    fn from(op: Operation) -> Self {
        Self::Operation(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert!(Digit::from_char('a').is_none());
    }

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::from_symbol("x"), Some(Operation::Multiply));
        assert_eq!(Operation::from_symbol("÷"), Some(Operation::Divide));
        assert_eq!(Operation::from_symbol("%"), None);
        assert_eq!(Operation::Multiply.to_string(), "×");
    }

    #[test]
    fn test_operation_apply() {
        assert_eq!(Operation::Add.apply(2.0, 2.0), 4.0);
        assert_eq!(Operation::Subtract.apply(2.0, 5.0), -3.0);
        assert_eq!(Operation::Multiply.apply(3.0, 4.0), 12.0);
        assert_eq!(Operation::Divide.apply(10.0, 4.0), 2.5);
    }
}
