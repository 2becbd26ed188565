//! Event dispatch for the calculator state machine.

use super::error::CalcError;
use super::event::InputEvent;
use super::state::CalculatorState;
use serde::Serialize;
use tracing::debug;

/// What the UI needs after an event: the display text and the error, if any.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EngineOutput {
    pub display: String,
    pub error: Option<CalcError>,
}

/// Result of a pure transition: the new state plus its rendered output.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    pub output: EngineOutput,
}

/// Apply one event to a copy of `state`.
pub fn transition(state: &CalculatorState, event: InputEvent) -> Transition {
    let mut next = state.clone();
    let output = apply(&mut next, event);
    Transition {
        state: next,
        output,
    }
}

/// Apply one event in place and render the result.
///
/// While an error is showing only [`InputEvent::Clear`] has any effect.
fn apply(state: &mut CalculatorState, event: InputEvent) -> EngineOutput {
    if state.is_error() && event != InputEvent::Clear {
        debug!(?event, "Ignoring input while in error state");
        return output_for(state);
    }

    let result = match event {
        InputEvent::Digit(digit) => {
            state.input_digit(digit);
            Ok(())
        }
        InputEvent::DecimalPoint => {
            state.input_decimal_point();
            Ok(())
        }
        InputEvent::Operation(op) => state.select_operation(op),
        InputEvent::Equals => state.equals(),
        InputEvent::Clear => {
            state.clear();
            Ok(())
        }
        InputEvent::ToggleSign => {
            state.toggle_sign();
            Ok(())
        }
        InputEvent::Percentage => {
            state.percentage();
            Ok(())
        }
    };

    if let Err(error) = result {
        // Already recorded on the state; the shell decides how to surface it.
        debug!(%error, "Entered error state");
    }

    debug!(
        ?event,
        current = %state.current_value,
        previous = ?state.previous_value,
        operation = ?state.operation,
        "Applied input"
    );

    output_for(state)
}

fn output_for(state: &CalculatorState) -> EngineOutput {
    EngineOutput {
        display: state.render(),
        error: state.error,
    }
}

/// A calculator that owns its state and mutates it in place.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Feed one input event.
    pub fn handle(&mut self, event: InputEvent) -> EngineOutput {
        apply(&mut self.state, event)
    }

    /// Current display output without changing anything.
    pub fn output(&self) -> EngineOutput {
        output_for(&self.state)
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }
}
