//! 生成結果の整形
//!
//! 独立した書き換えルールを順に文字列全体へ適用する。
//! 1 パス目は末尾の補足ブロック除去を行わない（2 パス目の入力として残す）。

use std::sync::LazyLock;

use regex::Regex;

/// ```lang の開始行と ``` の終了行（中身はそのまま）
static CODE_FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*```[\w+.#-]*[ \t]*(?:\r?\n|\z)").expect("valid fence regex")
});

/// 先頭・末尾の引用符 1 文字
static WRAPPING_QUOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A\s*["'“”‘’]|["'“”‘’]\s*\z"#).expect("valid quote regex")
});

/// 「Here's the rewritten text:」などの前置き（最初のコロンまで）
static PREAMBLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\A\s*(?:here(?:['’]?s| is)|i['’]?ve|i have|below is|following is|as requested|rewritten|rephrased)[^:\n]*:\s*",
    )
    .expect("valid preamble regex")
});

/// メールの件名行
static SUBJECT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\A\s*subject:[^\n]*(?:\n|\z)").expect("valid subject regex")
});

/// 空行の後に続く Note / P.S. / まとめ などの補足ブロック（末尾まで）
static TRAILING_REMARK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)\n[ \t]*\r?\n\s*(?:note\b|p\.?s\b\.?|in summary\b|to summarize\b|in conclusion\b).*\z",
    )
    .expect("valid trailing remark regex")
});

/// 整形ルール（適用順に並ぶ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupRule {
    StripCodeFences,
    StripWrappingQuotes,
    StripPreamble,
    StripSubjectLine,
    StripTrailingRemarks,
    Trim,
}

impl CleanupRule {
    /// 1 パス目（補足ブロック除去なし）
    pub const FIRST_PASS: [CleanupRule; 5] = [
        CleanupRule::StripCodeFences,
        CleanupRule::StripWrappingQuotes,
        CleanupRule::StripPreamble,
        CleanupRule::StripSubjectLine,
        CleanupRule::Trim,
    ];

    /// 最終パス（全ルール）
    pub const FINAL_PASS: [CleanupRule; 6] = [
        CleanupRule::StripCodeFences,
        CleanupRule::StripWrappingQuotes,
        CleanupRule::StripPreamble,
        CleanupRule::StripSubjectLine,
        CleanupRule::StripTrailingRemarks,
        CleanupRule::Trim,
    ];

    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::StripCodeFences => CODE_FENCE.replace_all(text, "").into_owned(),
            Self::StripWrappingQuotes => WRAPPING_QUOTE.replace_all(text, "").into_owned(),
            Self::StripPreamble => PREAMBLE.replace(text, "").into_owned(),
            Self::StripSubjectLine => SUBJECT_LINE.replace(text, "").into_owned(),
            Self::StripTrailingRemarks => TRAILING_REMARK.replace(text, "").into_owned(),
            Self::Trim => text.trim().to_string(),
        }
    }
}

fn apply_rules(text: &str, rules: &[CleanupRule]) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// 1 パス目の出力を整形する
pub fn normalize_first_pass(text: &str) -> String {
    apply_rules(text, &CleanupRule::FIRST_PASS)
}

/// 最終出力を整形する
pub fn normalize_final(text: &str) -> String {
    apply_rules(text, &CleanupRule::FINAL_PASS)
}
