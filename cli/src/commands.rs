use std::io::Read;

use rp_core::domain::error::AppError;
use rp_core::domain::settings::AppSettings;
use rp_core::domain::style::Style;
use rp_core::usecase::app_service::AppService;

use crate::RewriteArgs;

/// コマンドエラー型
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{}", .0.message)]
    App(#[from] AppError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

type CmdResult<T> = Result<T, CommandError>;

/// `settings set` で変更できる項目
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SettingField {
    Model,
    BaseUrl,
    Timeout,
    DefaultStyle,
    Copy,
}

impl SettingField {
    fn name(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::BaseUrl => "base-url",
            Self::Timeout => "timeout",
            Self::DefaultStyle => "default-style",
            Self::Copy => "copy",
        }
    }
}

/// 設定値を 1 項目だけ書き換える
pub fn apply_setting(settings: &mut AppSettings, field: SettingField, value: &str) -> CmdResult<()> {
    let value = value.trim();
    let invalid = |reason: &str| CommandError::InvalidValue {
        field: field.name(),
        reason: reason.to_string(),
    };

    match field {
        SettingField::Model => {
            if value.is_empty() {
                return Err(invalid("must not be empty"));
            }
            settings.model = value.to_string();
        }
        SettingField::BaseUrl => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(invalid("must start with http:// or https://"));
            }
            settings.api_base_url = value.to_string();
        }
        SettingField::Timeout => {
            let secs: u64 = value
                .parse()
                .map_err(|_| invalid("expected a number of seconds"))?;
            if secs == 0 {
                return Err(invalid("must be at least 1 second"));
            }
            settings.request_timeout_secs = secs;
        }
        SettingField::DefaultStyle => {
            if value.is_empty() {
                return Err(invalid("must not be empty"));
            }
            let style = Style::parse(value);
            if !style.is_known() {
                log::warn!("'{value}' is not a known style; rewrites will use the generic prompt");
            }
            settings.default_style = style.to_string();
        }
        SettingField::Copy => {
            settings.copy_to_clipboard = match value {
                "true" | "yes" | "on" | "1" => true,
                "false" | "no" | "off" | "0" => false,
                _ => return Err(invalid("expected true or false")),
            };
        }
    }
    Ok(())
}

fn read_input(args_text: &[String]) -> CmdResult<String> {
    if !args_text.is_empty() {
        return Ok(args_text.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

// --- Commands ---

pub async fn rewrite(service: &AppService, args: RewriteArgs) -> CmdResult<()> {
    let text = read_input(&args.text)?;
    let copy = if args.no_copy { Some(false) } else { None };

    let output = service
        .rewrite_and_deliver(&text, args.style.as_deref(), copy)
        .await?;

    if args.json {
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| AppError::internal(format!("Failed to serialize result: {e}")))?;
        println!("{json}");
    } else {
        println!("{}", output.text);
    }

    if output.copied {
        log::info!("copied to clipboard ({})", output.style);
    }
    Ok(())
}

pub fn styles() {
    for style in Style::KNOWN {
        println!("{:<10} {}", style.as_str(), style.description());
    }
}

pub fn settings_show(service: &AppService) -> CmdResult<()> {
    let settings = service.settings()?.masked();
    let json = serde_json::to_string_pretty(&settings)
        .map_err(|e| AppError::internal(format!("Failed to serialize settings: {e}")))?;
    println!("{json}");
    Ok(())
}

pub fn settings_set_key(service: &AppService, key: &str) -> CmdResult<()> {
    let settings = service.set_api_key(key)?;
    if settings.api_key.is_some() {
        println!("API key saved to {}", service.settings_path().display());
    } else {
        println!("API key cleared");
    }
    Ok(())
}

pub fn settings_set(service: &AppService, field: SettingField, value: &str) -> CmdResult<()> {
    let mut settings = service.settings()?;
    apply_setting(&mut settings, field, value)?;
    service.update_settings(&settings)?;
    println!("{} updated", field.name());
    Ok(())
}

#[cfg(test)]
mod tests {
    use rp_core::infra::settings_store::SettingsStore;

    use super::*;

    #[test]
    fn test_apply_timeout() {
        let mut s = AppSettings::default();
        apply_setting(&mut s, SettingField::Timeout, " 45 ").unwrap();
        assert_eq!(s.request_timeout_secs, 45);

        let err = apply_setting(&mut s, SettingField::Timeout, "soon").unwrap_err();
        assert!(err.to_string().starts_with("invalid value for timeout"));
        assert!(apply_setting(&mut s, SettingField::Timeout, "0").is_err());
    }

    #[test]
    fn test_apply_copy_flag() {
        let mut s = AppSettings::default();
        apply_setting(&mut s, SettingField::Copy, "off").unwrap();
        assert!(!s.copy_to_clipboard);
        apply_setting(&mut s, SettingField::Copy, "yes").unwrap();
        assert!(s.copy_to_clipboard);
        assert!(apply_setting(&mut s, SettingField::Copy, "maybe").is_err());
    }

    #[test]
    fn test_apply_base_url_requires_scheme() {
        let mut s = AppSettings::default();
        assert!(apply_setting(&mut s, SettingField::BaseUrl, "localhost:8080").is_err());
        apply_setting(&mut s, SettingField::BaseUrl, "http://localhost:8080").unwrap();
        assert_eq!(s.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn test_apply_default_style_accepts_unknown() {
        let mut s = AppSettings::default();
        apply_setting(&mut s, SettingField::DefaultStyle, "gen-z").unwrap();
        assert_eq!(s.default_style, "gen-z");
        apply_setting(&mut s, SettingField::DefaultStyle, "pirate").unwrap();
        assert_eq!(s.default_style, "pirate");
    }

    #[test]
    fn test_read_input_joins_args() {
        let text = read_input(&["hello".to_string(), "world".to_string()]).unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_settings_commands_persist() {
        let dir = tempfile::tempdir().unwrap();
        let service = AppService::new(SettingsStore::open(dir.path().join("settings.json")));

        settings_set_key(&service, "abc12345").unwrap();
        settings_set(&service, SettingField::Model, "gemini-1.5-flash").unwrap();

        let settings = service.settings().unwrap();
        assert_eq!(settings.api_key.as_deref(), Some("abc12345"));
        assert_eq!(settings.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_app_error_displays_message_only() {
        let err: CommandError = AppError::credential("No API key configured").into();
        assert_eq!(err.to_string(), "No API key configured");
    }
}
