use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::error::AppError;
use crate::domain::settings::AppSettings;

/// 設定ファイルのパスを上書きする環境変数
pub const SETTINGS_PATH_ENV: &str = "REPHRASER_SETTINGS";

const APP_DIR: &str = "text-rephraser";
const SETTINGS_FILE: &str = "settings.json";

/// 設定の永続化（JSON ファイル）
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 環境変数 → OS の設定ディレクトリ の順でパスを決める
    pub fn open_default() -> Result<Self, AppError> {
        if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
            if !path.trim().is_empty() {
                return Ok(Self::open(path));
            }
        }

        let dir = dirs::config_dir()
            .ok_or_else(|| AppError::settings("Could not determine config directory"))?;
        Ok(Self::open(dir.join(APP_DIR).join(SETTINGS_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルが無ければデフォルト設定を返す
    pub fn load(&self) -> Result<AppSettings, AppError> {
        if !self.path.exists() {
            log::debug!("settings file not found, using defaults: {}", self.path.display());
            return Ok(AppSettings::default());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| AppError::settings(format!("Failed to read settings file: {e}")))?;

        serde_json::from_str(&json)
            .map_err(|e| AppError::settings(format!("Failed to parse settings file: {e}")))
    }

    pub fn save(&self, settings: &AppSettings) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::settings(format!("Failed to create config directory: {e}")))?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| AppError::settings(format!("Failed to serialize settings: {e}")))?;

        fs::write(&self.path, json)
            .map_err(|e| AppError::settings(format!("Failed to write settings file: {e}")))?;

        log::info!("settings saved: {}", self.path.display());
        Ok(())
    }

    /// API キーを保存する（空文字は削除扱い）
    pub fn set_api_key(&self, api_key: &str) -> Result<AppSettings, AppError> {
        let mut settings = self.load()?;
        let trimmed = api_key.trim();
        settings.api_key = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self.save(&settings)?;
        Ok(settings)
    }
}
