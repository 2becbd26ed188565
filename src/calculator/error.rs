//! Error kinds raised while evaluating a pending calculation.

use serde::Serialize;
use thiserror::Error;

/// Errors that move the calculator into its `Error` display state.
///
/// None of these are fatal. They are shown to the user and the calculator
/// must be cleared before it accepts further input.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalcError {
    /// One of the operands is not a number.
    #[error("Invalid input")]
    InvalidInput,

    /// The right operand of a division is exactly zero.
    #[error("Cannot divide by zero")]
    DivideByZero,

    /// The result overflowed to a non-finite value.
    #[error("Result too large")]
    ResultTooLarge,
}
