//! Key bindings for the calculator keypad.

use crate::calculator::{Digit, InputEvent, Operation};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

lazy_static! {
    /// Keys that are not digits or operator symbols.
    static ref NAMED_KEYS: HashMap<&'static str, InputEvent> = {
        let mut keys = HashMap::new();
        keys.insert("Enter", InputEvent::Equals);
        keys.insert("=", InputEvent::Equals);
        keys.insert("Escape", InputEvent::Clear);
        keys.insert("Backspace", InputEvent::Clear);
        keys.insert("Delete", InputEvent::Clear);
        keys.insert("c", InputEvent::Clear);
        keys.insert("C", InputEvent::Clear);
        keys.insert(".", InputEvent::DecimalPoint);
        keys.insert(",", InputEvent::DecimalPoint);
        keys.insert("%", InputEvent::Percentage);
        keys.insert("_", InputEvent::ToggleSign);
        keys.insert("±", InputEvent::ToggleSign);
        keys
    };

    /// A named key as a whole word, or any other single visible character.
    static ref KEY_TOKEN: Regex = Regex::new(r"Enter|Escape|Backspace|Delete|\S").unwrap();
}

/// Look up the event bound to a key, if any.
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    if let Some(event) = NAMED_KEYS.get(key) {
        return Some(*event);
    }

    if let Some(op) = Operation::from_symbol(key) {
        return Some(InputEvent::Operation(op));
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Digit::from_char(c).map(InputEvent::Digit),
        _ => None,
    }
}

/// Split a key script like `"12+3=Escape"` into key names.
///
/// Whitespace separates nothing and is skipped.
pub fn tokenize_keys(script: &str) -> Vec<&str> {
    KEY_TOKEN.find_iter(script).map(|m| m.as_str()).collect()
}
