//! スタイル別リライトプロンプトテンプレート
//!
//! 1 パス目: 共通制約 + スタイル別の文体指示
//! 2 パス目: 「人間らしく」共通指示 + スタイル別のペルソナ
//! 未知のスタイルは共通部分と原文のみ（スタイル指示なし）。

use crate::domain::style::Style;

/// 1 パス目の共通制約
pub const FIRST_PASS_BASE: &str = "\
Rewrite the following text. Your response should:
1. Be approximately the same length as the original text
2. Contain ONLY the rewritten text with no explanations, options, or additional commentary
3. Preserve the key information and meaning of the original text
4. Not add any facts that are not in the original text
5. Not include any introductory phrases like \"Here's the rewritten text\" or \"Here you go\"
6. Sound natural and human-like, as if written by a real person";

/// Developer: 技術用語 + 簡潔さ
pub const FIRST_PASS_DEVELOPER: &str = "\
Rewrite this as if a software engineer wrote it. Your response should:
- Use precise technical terminology where appropriate
- Be concise and efficient in expression
- Include occasional programming analogies or references
- Have a logical structure with clear reasoning
- Maintain a slightly informal but professional tone
- Use technical jargon that would be familiar to developers";

/// Friendly: 温かみ + 会話調
pub const FIRST_PASS_FRIENDLY: &str = "\
Rewrite this in a genuinely warm and friendly tone. Your response should:
- Use conversational language with a personal touch
- Include encouraging and supportive phrases
- Sound like someone speaking to a good friend
- Use warm, inviting language that builds connection
- Have a positive, uplifting quality";

/// Business: 職場向け、簡潔・行動志向
pub const FIRST_PASS_BUSINESS: &str = "\
Rewrite this for a professional business context. Your response should:
- Use appropriate business terminology and phrasing
- Maintain a professional but not overly formal tone
- Be clear, concise, and action-oriented
- Sound like an email or message from a competent colleague
- Be structured in a way that respects the reader's time";

/// Gen-Z: スラング + 絵文字
pub const FIRST_PASS_GEN_Z: &str = "\
Rewrite this using authentic Gen-Z language and style. Your response should:
- Include current slang and expressions used by Gen-Z
- Use emojis naturally throughout the text
- Include abbreviated expressions and internet shorthand
- Have a casual, conversational flow
- Sound like a text message or social media post";

/// 2 パス目の共通指示
pub const SECOND_PASS_BASE: &str = "\
Make the following text sound like it was written by a real human, not by an AI.
- Preserve all of the meaning and every piece of information
- Keep roughly the same length
- Do not add new facts, greetings, or sign-offs that are not already there
- Return ONLY the final text with no commentary, notes, or preamble";

pub const SECOND_PASS_DEVELOPER: &str = "\
Write it like a real engineer posting in a team chat channel: direct, a bit terse, \
no corporate filler, technical terms kept as they are.";

pub const SECOND_PASS_FRIENDLY: &str = "\
Write it like a real person texting a good friend: relaxed, kind, natural contractions, \
nothing that sounds scripted.";

pub const SECOND_PASS_BUSINESS: &str = "\
Write it like a real colleague's email body: polite, clear, to the point, \
no subject line and no stiff boilerplate.";

pub const SECOND_PASS_GEN_Z: &str = "\
Write it like a real Gen-Z person typing on their phone: lowercase is fine, \
slang and emojis only where they feel natural, never forced.";

fn first_pass_directives(style: &Style) -> Option<&'static str> {
    match style {
        Style::Developer => Some(FIRST_PASS_DEVELOPER),
        Style::Friendly => Some(FIRST_PASS_FRIENDLY),
        Style::Business => Some(FIRST_PASS_BUSINESS),
        Style::GenZ => Some(FIRST_PASS_GEN_Z),
        Style::Other(_) => None,
    }
}

fn second_pass_persona(style: &Style) -> Option<&'static str> {
    match style {
        Style::Developer => Some(SECOND_PASS_DEVELOPER),
        Style::Friendly => Some(SECOND_PASS_FRIENDLY),
        Style::Business => Some(SECOND_PASS_BUSINESS),
        Style::GenZ => Some(SECOND_PASS_GEN_Z),
        Style::Other(_) => None,
    }
}

fn assemble(base: &str, directives: Option<&str>, label: &str, text: &str) -> String {
    match directives {
        Some(directives) => format!("{base}\n\n{directives}\n\n{label}: \"{text}\""),
        None => format!("{base}\n\n{label}: \"{text}\""),
    }
}

/// 1 パス目のプロンプトを構築する
pub fn build_first_prompt(style: &Style, text: &str) -> String {
    assemble(FIRST_PASS_BASE, first_pass_directives(style), "Original text", text)
}

/// 2 パス目のプロンプトを構築する（入力は 1 パス目の整形済み出力）
pub fn build_second_prompt(style: &Style, first_pass_output: &str) -> String {
    assemble(
        SECOND_PASS_BASE,
        second_pass_persona(style),
        "Text to rewrite",
        first_pass_output,
    )
}
