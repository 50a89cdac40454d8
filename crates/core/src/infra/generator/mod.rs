pub mod gemini;

pub use gemini::{GeminiConfig, GeminiGenerator};

use async_trait::async_trait;

use crate::domain::request::Credential;

/// 生成 API 呼び出しの失敗
///
/// 通信・認証・プロバイダ側のエラーはすべてこの 1 種類にまとめる。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GenerationFailure {
    pub message: String,
}

impl GenerationFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// テキスト生成 trait（外部 LLM が実装する）
///
/// 1 回の呼び出しにつきネットワーク呼び出しは 1 回。リトライはしない。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, GenerationFailure>;

    fn name(&self) -> &str;
}
