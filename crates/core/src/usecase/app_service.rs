use std::sync::Arc;

use serde::Serialize;

use crate::domain::error::AppError;
use crate::domain::request::{Credential, RewriteRequest};
use crate::domain::settings::AppSettings;
use crate::domain::style::Style;
use crate::infra::generator::{GeminiConfig, GeminiGenerator, TextGenerator};
use crate::infra::output::OutputRouter;
use crate::infra::settings_store::SettingsStore;
use crate::usecase::pipeline::RewritePipeline;

/// 保存済みキーが無いときに参照する環境変数
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// 設定から生成クライアントを組み立てる関数
pub type GeneratorFactory =
    Box<dyn Fn(&AppSettings) -> Result<Arc<dyn TextGenerator>, AppError> + Send + Sync>;

/// リライト + 配信の結果
#[derive(Debug, Clone, Serialize)]
pub struct RewriteOutput {
    pub text: String,
    pub style: Style,
    pub copied: bool,
}

/// アプリケーションサービス（CLI などの呼び出し側が保持する）
pub struct AppService {
    store: SettingsStore,
    output_router: OutputRouter,
    generator_factory: GeneratorFactory,
    fallback_api_key: Option<String>,
}

fn gemini_factory() -> GeneratorFactory {
    Box::new(|settings: &AppSettings| -> Result<Arc<dyn TextGenerator>, AppError> {
        let generator = GeminiGenerator::new(GeminiConfig::from(settings))
            .map_err(|e| AppError::internal(e.message))?;
        Ok(Arc::new(generator) as Arc<dyn TextGenerator>)
    })
}

impl AppService {
    /// Gemini + クリップボード構成。API キーの予備として環境変数を読む
    pub fn new(store: SettingsStore) -> Self {
        let fallback_api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_parts(store, OutputRouter::new(), gemini_factory(), fallback_api_key)
    }

    pub fn with_parts(
        store: SettingsStore,
        output_router: OutputRouter,
        generator_factory: GeneratorFactory,
        fallback_api_key: Option<String>,
    ) -> Self {
        Self {
            store,
            output_router,
            generator_factory,
            fallback_api_key,
        }
    }

    // ==================== Settings ====================

    pub fn settings(&self) -> Result<AppSettings, AppError> {
        self.store.load()
    }

    pub fn settings_path(&self) -> &std::path::Path {
        self.store.path()
    }

    pub fn update_settings(&self, settings: &AppSettings) -> Result<(), AppError> {
        self.store.save(settings)
    }

    pub fn set_api_key(&self, api_key: &str) -> Result<AppSettings, AppError> {
        self.store.set_api_key(api_key)
    }

    /// 保存済みキー → 環境変数 の順で認証情報を決める
    pub fn resolve_credential(&self, settings: &AppSettings) -> Result<Credential, AppError> {
        settings
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .or(self.fallback_api_key.as_deref())
            .map(Credential::new)
            .ok_or_else(|| {
                AppError::credential(format!(
                    "No API key configured. Run `rephraser settings set-key <KEY>` or set {API_KEY_ENV}"
                ))
            })
    }

    // ==================== Rewrite ====================

    /// スタイル未指定なら設定のデフォルトを使う
    pub async fn rewrite(&self, text: &str, style: Option<&str>) -> Result<String, AppError> {
        let settings = self.settings()?;
        self.rewrite_with(&settings, text, style)
            .await
            .map(|(text, _)| text)
    }

    /// リライトして出力先へ配信する。`copy` が None なら設定に従う
    pub async fn rewrite_and_deliver(
        &self,
        text: &str,
        style: Option<&str>,
        copy: Option<bool>,
    ) -> Result<RewriteOutput, AppError> {
        let settings = self.settings()?;
        let (rewritten, style) = self.rewrite_with(&settings, text, style).await?;

        let copied = if copy.unwrap_or(settings.copy_to_clipboard) {
            match self.output_router.deliver(&rewritten) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("delivery to {} failed: {e}", self.output_router.target_name());
                    false
                }
            }
        } else {
            false
        };

        Ok(RewriteOutput {
            text: rewritten,
            style,
            copied,
        })
    }

    async fn rewrite_with(
        &self,
        settings: &AppSettings,
        text: &str,
        style: Option<&str>,
    ) -> Result<(String, Style), AppError> {
        let style = Style::parse(style.unwrap_or(&settings.default_style));
        if !style.is_known() {
            log::warn!("unknown style '{style}', using generic rewrite");
        }

        let request = RewriteRequest::new(text, style.clone(), self.resolve_credential(settings)?)?;
        let generator = (self.generator_factory)(settings)?;
        let pipeline = RewritePipeline::new(generator);

        let rewritten = pipeline.rewrite(&request).await?;
        Ok((rewritten, style))
    }
}
