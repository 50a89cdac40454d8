use serde::Serialize;

/// リライトパイプラインのエラー
///
/// `Generation` の表示形式 `Failed to process text: <message>` は呼び出し側との契約。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RewriteError {
    #[error("Failed to process text: {0}")]
    Generation(String),
    #[error("Text to rewrite is empty")]
    InvalidInput,
}

/// アプリケーション共通エラーコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "E_INVALID_INPUT")]
    InvalidInput,
    #[serde(rename = "E_CREDENTIAL")]
    Credential,
    #[serde(rename = "E_REWRITE")]
    Rewrite,
    #[serde(rename = "E_SETTINGS")]
    Settings,
    #[serde(rename = "E_OUTPUT")]
    Output,
    #[serde(rename = "E_INTERNAL")]
    Internal,
}

/// アプリケーションエラー（呼び出し側への通知用）
#[derive(Debug, Clone, Serialize)]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub recoverable: bool,
}

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InvalidInput,
            message: msg.into(),
            recoverable: true,
        }
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Credential,
            message: msg.into(),
            recoverable: true,
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Settings,
            message: msg.into(),
            recoverable: false,
        }
    }

    pub fn output(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Output,
            message: msg.into(),
            recoverable: true,
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Internal,
            message: msg.into(),
            recoverable: false,
        }
    }
}

impl From<RewriteError> for AppError {
    fn from(err: RewriteError) -> Self {
        match err {
            RewriteError::InvalidInput => Self::invalid_input(err.to_string()),
            RewriteError::Generation(_) => Self {
                code: ErrorCode::Rewrite,
                message: err.to_string(),
                recoverable: true,
            },
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {}
