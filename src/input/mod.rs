//! Keyboard input for the calculator.
//!
//! Maps key names to calculator events and splits typed key scripts into
//! individual keys.

mod keymap;

pub use keymap::{event_for_key, tokenize_keys};
