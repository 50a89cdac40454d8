use std::fmt;

use super::error::RewriteError;
use super::style::Style;

/// 生成 API の認証情報（API キー）
///
/// Debug 出力ではマスクする。パイプラインは保持・永続化しない。
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// リライト要求（生成後は不変）
#[derive(Debug, Clone)]
pub struct RewriteRequest {
    raw_text: String,
    style: Style,
    credential: Credential,
}

impl RewriteRequest {
    /// 前後の空白を除去したテキストが空なら `InvalidInput`
    pub fn new(
        raw_text: impl Into<String>,
        style: Style,
        credential: Credential,
    ) -> Result<Self, RewriteError> {
        let raw_text = raw_text.into().trim().to_string();
        if raw_text.is_empty() {
            return Err(RewriteError::InvalidInput);
        }
        Ok(Self {
            raw_text,
            style,
            credential,
        })
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }
}
