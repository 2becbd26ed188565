//! Terminal front end for the calculator engine.
//!
//! Turns key presses into engine events and owns the presentation policy
//! the engine leaves out: clearing an error after a delay and copying
//! results to the clipboard.

mod frame;

pub use frame::Frame;

use crate::calculator::{CalculatorEngine, EngineOutput, InputEvent, copy_to_clipboard};
use crate::config::ShellConfig;
use crate::input::{event_for_key, tokenize_keys};
use std::time::Instant;
use tracing::{debug, info, warn};

pub struct Shell {
    engine: CalculatorEngine,
    config: ShellConfig,
    /// When the error currently on screen appeared.
    error_since: Option<Instant>,
}

impl Shell {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            engine: CalculatorEngine::new(),
            config,
            error_since: None,
        }
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }

    /// What the display currently shows.
    pub fn output(&self) -> EngineOutput {
        self.engine.output()
    }

    /// Handle a key press now.
    pub fn handle_key(&mut self, key: &str) -> Option<Frame> {
        self.handle_key_at(key, Instant::now())
    }

    /// Handle a key press at `now`. Unbound keys are ignored.
    pub fn handle_key_at(&mut self, key: &str, now: Instant) -> Option<Frame> {
        self.expire_error(now);

        let Some(event) = event_for_key(key) else {
            debug!(key, "Ignoring unbound key");
            return None;
        };

        let output = self.engine.handle(event);

        match output.error {
            Some(error) if self.error_since.is_none() => {
                warn!(%error, "Calculator error");
                self.error_since = Some(now);
            }
            Some(_) => {}
            None => self.error_since = None,
        }

        if event == InputEvent::Equals
            && output.error.is_none()
            && self.config.copy_on_equals
            && let Err(e) = copy_to_clipboard(&output.display)
        {
            warn!("{:#}", e);
        }

        Some(Frame::new(key, event, output))
    }

    /// Feed every key of a script at `now`, returning a frame per bound key.
    pub fn run_script_at(&mut self, script: &str, now: Instant) -> Vec<Frame> {
        tokenize_keys(script)
            .into_iter()
            .filter_map(|key| self.handle_key_at(key, now))
            .collect()
    }

    pub fn run_script(&mut self, script: &str) -> Vec<Frame> {
        self.run_script_at(script, Instant::now())
    }

    /// Clear the calculator once an error has been shown long enough.
    fn expire_error(&mut self, now: Instant) {
        let Some(since) = self.error_since else {
            return;
        };

        if now.saturating_duration_since(since) >= self.config.error_clear_delay() {
            info!("Clearing error after timeout");
            self.engine.handle(InputEvent::Clear);
            self.error_since = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcError;
    use std::time::Duration;

    fn shell() -> Shell {
        Shell::new(ShellConfig::default())
    }

    #[test]
    fn test_script_evaluates() {
        let mut shell = shell();
        let frames = shell.run_script("2+3x4=");
        assert_eq!(frames.len(), 6);
        assert_eq!(frames.last().unwrap().display, "20");
        assert_eq!(shell.output().display, "20");
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut shell = shell();
        assert!(shell.handle_key("q").is_none());
        let frames = shell.run_script("1 q 2");
        assert_eq!(frames.len(), 2);
        assert_eq!(shell.output().display, "12");
    }

    #[test]
    fn test_error_held_until_delay() {
        let mut shell = shell();
        let start = Instant::now();
        let frames = shell.run_script_at("5/0=", start);
        assert_eq!(frames.last().unwrap().error, Some(CalcError::DivideByZero));

        // Too early: the engine ignores the digit
        let frame = shell
            .handle_key_at("7", start + Duration::from_millis(500))
            .unwrap();
        assert_eq!(frame.display, "Error");

        // Delay measured from when the error first appeared
        let frame = shell
            .handle_key_at("7", start + Duration::from_millis(1000))
            .unwrap();
        assert_eq!(frame.display, "7");
        assert!(frame.error.is_none());
    }

    #[test]
    fn test_manual_clear_resets_error() {
        let mut shell = shell();
        let start = Instant::now();
        shell.run_script_at("5/0=", start);
        let frames = shell.run_script_at("Escape 8", start);
        assert_eq!(frames.last().unwrap().display, "8");
        assert!(!shell.engine().is_error());
    }

    #[test]
    fn test_zero_delay_clears_on_next_key() {
        let mut shell = Shell::new(ShellConfig {
            error_clear_ms: 0,
            copy_on_equals: false,
        });
        let frames = shell.run_script("5/0=3");
        assert_eq!(frames.last().unwrap().display, "3");
    }
}
