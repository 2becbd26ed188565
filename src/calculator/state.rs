//! Calculator state and its per-event transitions.

use super::display::format_display;
use super::error::CalcError;
use super::evaluation::{evaluate, number_to_string, parse_operand};
use super::event::{Digit, Operation};
use serde::Serialize;
use tracing::debug;

/// Text shown while the calculator is in its error state.
pub const ERROR_SENTINEL: &str = "Error";

/// The complete state of an immediate-execution calculator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    /// Literal text of the operand being entered or the last result.
    pub current_value: String,
    /// Left operand of the pending operation.
    pub previous_value: Option<f64>,
    /// Operation waiting for its right operand.
    pub operation: Option<Operation>,
    /// The next digit starts a fresh operand.
    pub waiting_for_operand: bool,
    /// Equals just produced the value on screen.
    pub just_calculated: bool,
    /// Set exactly while `current_value` is the error sentinel.
    pub error: Option<CalcError>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            current_value: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_operand: false,
            just_calculated: false,
            error: None,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the calculator is showing an error and needs clearing.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// The text for the display.
    pub fn render(&self) -> String {
        format_display(&self.current_value)
    }

    /// Whether the next digit or decimal point replaces the current value.
    fn starts_fresh_operand(&self) -> bool {
        self.waiting_for_operand || self.just_calculated
    }

    pub fn input_digit(&mut self, digit: Digit) {
        if self.starts_fresh_operand() {
            self.current_value = digit.to_string();
            self.waiting_for_operand = false;
            self.just_calculated = false;
        } else if self.current_value == "0" {
            self.current_value = digit.to_string();
        } else {
            self.current_value.push(digit.as_char());
        }
    }

    pub fn input_decimal_point(&mut self) {
        if self.starts_fresh_operand() {
            self.current_value = "0.".to_string();
            self.waiting_for_operand = false;
            self.just_calculated = false;
        } else if !self.current_value.contains('.') {
            self.current_value.push('.');
        }
    }

    /// Select the next operation, evaluating the pending one first when a
    /// second operand has been typed.
    ///
    /// Selecting an operation while still waiting for an operand only
    /// replaces the pending operation.
    pub fn select_operation(&mut self, op: Operation) -> Result<(), CalcError> {
        match (self.previous_value, self.operation) {
            (None, _) => {
                let value = match parse_operand(&self.current_value) {
                    Some(value) => value,
                    None => return Err(self.fail(CalcError::InvalidInput)),
                };
                self.previous_value = Some(value);
            }
            (Some(lhs), Some(pending)) if !self.waiting_for_operand => {
                let result = match evaluate(lhs, pending, &self.current_value) {
                    Ok(result) => result,
                    Err(e) => return Err(self.fail(e)),
                };
                self.current_value = number_to_string(result);
                self.previous_value = Some(result);
            }
            _ => {}
        }

        self.operation = Some(op);
        self.waiting_for_operand = true;
        self.just_calculated = false;
        Ok(())
    }

    /// Apply the pending operation. Does nothing if none is pending.
    pub fn equals(&mut self) -> Result<(), CalcError> {
        let (Some(lhs), Some(op)) = (self.previous_value, self.operation) else {
            return Ok(());
        };

        let result = match evaluate(lhs, op, &self.current_value) {
            Ok(result) => result,
            Err(e) => return Err(self.fail(e)),
        };

        self.current_value = number_to_string(result);
        self.previous_value = None;
        self.operation = None;
        self.waiting_for_operand = true;
        self.just_calculated = true;
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_sign(&mut self) {
        if self.current_value == "0" {
            return;
        }

        self.current_value = match self.current_value.strip_prefix('-') {
            Some(unsigned) => unsigned.to_string(),
            None => format!("-{}", self.current_value),
        };
    }

    /// Divide the current value by 100. Non-numeric values are left alone.
    pub fn percentage(&mut self) {
        if let Some(value) = parse_operand(&self.current_value) {
            self.current_value = number_to_string(value / 100.0);
        }
    }

    /// Enter the error state. Pending operand and operation are left stale.
    fn fail(&mut self, error: CalcError) -> CalcError {
        debug!(%error, operand = %self.current_value, "Calculation failed");
        self.current_value = ERROR_SENTINEL.to_string();
        self.error = Some(error);
        error
    }
}
