use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// アプリケーション設定
///
/// 欠けているフィールドはデフォルト値で補う（古い設定ファイルとの互換性）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Gemini API キー（ローカル JSON に保存）
    pub api_key: Option<String>,
    /// 生成モデル名
    pub model: String,
    /// API ベース URL（テスト時はモックサーバーに差し替え）
    pub api_base_url: String,
    /// 1 リクエストあたりのタイムアウト（秒）
    pub request_timeout_secs: u64,
    /// スタイル未指定時のデフォルト
    pub default_style: String,
    /// 結果をクリップボードにコピーするか
    pub copy_to_clipboard: bool,
}

impl AppSettings {
    /// 表示用: API キーを末尾 4 文字以外マスクしたコピー
    pub fn masked(&self) -> Self {
        let api_key = self.api_key.as_ref().map(|key| {
            let tail: String = key
                .chars()
                .rev()
                .take(4)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            if key.chars().count() <= 4 {
                "****".to_string()
            } else {
                format!("****{tail}")
            }
        });
        Self {
            api_key,
            ..self.clone()
        }
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: 30,
            default_style: "developer".to_string(),
            copy_to_clipboard: true,
        }
    }
}
