use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// リライトのトーン
///
/// 既知の 4 スタイル以外の文字列も `Other` として受け付ける。
/// 未知のスタイルはエラーにせず、フォールバックのプロンプトで処理する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Style {
    Developer,
    Friendly,
    Business,
    GenZ,
    Other(String),
}

impl Style {
    /// サポート対象のスタイル一覧（表示順）
    pub const KNOWN: [Style; 4] = [Style::Developer, Style::Friendly, Style::Business, Style::GenZ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            "developer" => Self::Developer,
            "friendly" => Self::Friendly,
            "business" => Self::Business,
            "gen-z" => Self::GenZ,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Developer => "developer",
            Self::Friendly => "friendly",
            Self::Business => "business",
            Self::GenZ => "gen-z",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// 一覧表示用の短い説明
    pub fn description(&self) -> &'static str {
        match self {
            Self::Developer => "concise, technical, written like a software engineer",
            Self::Friendly => "warm and conversational, like talking to a friend",
            Self::Business => "professional workplace message from a colleague",
            Self::GenZ => "casual Gen-Z slang with emojis",
            Self::Other(_) => "generic rewrite with no style directives",
        }
    }
}

impl FromStr for Style {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for Style {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_styles() {
        assert_eq!(Style::parse("developer"), Style::Developer);
        assert_eq!(Style::parse("friendly"), Style::Friendly);
        assert_eq!(Style::parse("business"), Style::Business);
        assert_eq!(Style::parse("gen-z"), Style::GenZ);
    }

    #[test]
    fn test_parse_unknown_style_never_fails() {
        let style: Style = "pirate".parse().unwrap();
        assert_eq!(style, Style::Other("pirate".to_string()));
        assert!(!style.is_known());
        assert_eq!(style.as_str(), "pirate");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        // 識別子は完全一致のみ。大文字違いはフォールバック扱い
        assert_eq!(Style::parse("Business"), Style::Other("Business".to_string()));
    }

    #[test]
    fn test_round_trip_through_string() {
        for style in Style::KNOWN {
            assert_eq!(Style::parse(style.as_str()), style);
        }
    }
}
