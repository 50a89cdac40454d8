mod clipboard;

pub use clipboard::ClipboardOutput;

use crate::domain::error::AppError;

/// 出力先 trait
pub trait OutputTarget: Send + Sync {
    fn deliver(&self, text: &str) -> Result<(), AppError>;
    fn name(&self) -> &str;
}

/// 出力ルーター: リライト結果を出力先に配信する
pub struct OutputRouter {
    target: Box<dyn OutputTarget>,
}

impl OutputRouter {
    pub fn new() -> Self {
        Self::with_target(Box::new(ClipboardOutput::new()))
    }

    pub fn with_target(target: Box<dyn OutputTarget>) -> Self {
        Self { target }
    }

    pub fn deliver(&self, text: &str) -> Result<(), AppError> {
        log::debug!("delivering to {}", self.target.name());
        self.target.deliver(text)
    }

    pub fn target_name(&self) -> &str {
        self.target.name()
    }
}

impl Default for OutputRouter {
    fn default() -> Self {
        Self::new()
    }
}
