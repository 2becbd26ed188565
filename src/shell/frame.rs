//! One rendered update of the calculator display.

use crate::calculator::{CalcError, EngineOutput, InputEvent};
use serde::Serialize;
use std::fmt;

/// The display after a single key press.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    /// The key that was pressed.
    pub key: String,
    pub event: InputEvent,
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcError>,
}

impl Frame {
    pub fn new(key: &str, event: InputEvent, output: EngineOutput) -> Self {
        Self {
            key: key.to_string(),
            event,
            display: output.display,
            error: output.error,
        }
    }

    /// Serialize as a single JSON line.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error {
            Some(error) => write!(f, "{:>12}  [{}] {}", self.display, self.key, error),
            None => write!(f, "{:>12}  [{}]", self.display, self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{Digit, Operation};

    #[test]
    fn test_json_frame() {
        let frame = Frame::new(
            "7",
            InputEvent::Digit(Digit::new(7).unwrap()),
            EngineOutput {
                display: "7".to_string(),
                error: None,
            },
        );
        assert_eq!(
            frame.to_json().unwrap(),
            r#"{"key":"7","event":{"type":"digit","value":7},"display":"7"}"#
        );
    }

    #[test]
    fn test_json_error_frame() {
        let frame = Frame::new(
            "=",
            InputEvent::Equals,
            EngineOutput {
                display: "Error".to_string(),
                error: Some(CalcError::DivideByZero),
            },
        );
        let json = frame.to_json().unwrap();
        assert!(json.contains(r#""event":{"type":"equals"}"#));
        assert!(json.contains(r#""error":"divide_by_zero""#));
    }

    #[test]
    fn test_text_frame() {
        let frame = Frame::new(
            "x",
            Operation::Multiply.into(),
            EngineOutput {
                display: "5".to_string(),
                error: None,
            },
        );
        assert_eq!(frame.to_string(), "           5  [x]");
    }
}
