use super::OutputTarget;
use crate::domain::error::AppError;

/// クリップボード出力（arboard）
pub struct ClipboardOutput;

impl ClipboardOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ClipboardOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTarget for ClipboardOutput {
    fn deliver(&self, text: &str) -> Result<(), AppError> {
        let mut ctx = arboard::Clipboard::new()
            .map_err(|e| AppError::output(format!("Failed to open clipboard: {e}")))?;
        ctx.set_text(text)
            .map_err(|e| AppError::output(format!("Failed to copy to clipboard: {e}")))?;
        log::info!("copied to clipboard: {} chars", text.chars().count());
        Ok(())
    }

    fn name(&self) -> &str {
        "clipboard"
    }
}
