//! Immediate-execution calculator engine.
//!
//! This module provides:
//! - The calculator state and its per-event transitions
//! - A typed event enum dispatched through a single transition function
//! - Display formatting for the calculator screen
//! - Copying results to the clipboard

mod clipboard;
mod display;
mod engine;
mod error;
mod evaluation;
mod event;
mod state;

pub use clipboard::copy_to_clipboard;
pub use display::{DISPLAY_WIDTH, format_display};
pub use engine::{CalculatorEngine, EngineOutput, Transition, transition};
pub use error::CalcError;
pub use evaluation::{evaluate, number_to_string, parse_operand};
pub use event::{Digit, InputEvent, Operation};
pub use state::{CalculatorState, ERROR_SENTINEL};
