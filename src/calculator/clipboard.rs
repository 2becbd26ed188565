//! Clipboard support for copying calculator results.

use anyhow::{Context, Result};
use arboard::Clipboard;
use tracing::debug;

/// Copy the displayed result to the system clipboard.
///
/// Thousand separators are stripped so the pasted text is a plain number.
pub fn copy_to_clipboard(display: &str) -> Result<()> {
    let text = clipboard_text(display);

    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text.clone())
        .context("Failed to copy to clipboard")?;

    debug!(%text, "Copied result to clipboard");
    Ok(())
}

fn clipboard_text(display: &str) -> String {
    display.chars().filter(|&c| c != ',').collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_text_strips_separators() {
        assert_eq!(clipboard_text("1,234,567.89"), "1234567.89");
        assert_eq!(clipboard_text("-42"), "-42");
        assert_eq!(clipboard_text("Error"), "Error");
    }
}
