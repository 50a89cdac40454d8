use std::sync::Arc;

use crate::domain::error::RewriteError;
use crate::domain::pass::{PassState, PassTracker};
use crate::domain::request::{Credential, RewriteRequest};
use crate::domain::style::Style;
use crate::infra::generator::TextGenerator;
use crate::infra::{normalizer, prompts};

/// 1 回の実行結果（状態履歴付き）
#[derive(Debug)]
pub struct PipelineRun {
    pub history: Vec<PassState>,
    pub result: Result<String, RewriteError>,
}

/// 2 パスリライトパイプライン
///
/// pass1 → 整形(5 ルール) → pass2 → 整形(6 ルール)。
/// 2 回の生成呼び出しは必ず逐次で、どちらかが失敗したら部分結果は返さない。
/// 実行間で共有する可変状態は持たない。
#[derive(Clone)]
pub struct RewritePipeline {
    generator: Arc<dyn TextGenerator>,
}

impl RewritePipeline {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// 文字列引数版（スタイルは未知でもエラーにしない）
    pub async fn rewrite_text(
        &self,
        text: &str,
        style: &str,
        credential: &str,
    ) -> Result<String, RewriteError> {
        let request = RewriteRequest::new(text, Style::parse(style), Credential::new(credential))?;
        self.rewrite(&request).await
    }

    pub async fn rewrite(&self, request: &RewriteRequest) -> Result<String, RewriteError> {
        self.run(request).await.result
    }

    pub async fn run(&self, request: &RewriteRequest) -> PipelineRun {
        let mut tracker = PassTracker::new();
        let result = self.drive(request, &mut tracker).await;
        PipelineRun {
            history: tracker.into_history(),
            result,
        }
    }

    async fn drive(
        &self,
        request: &RewriteRequest,
        tracker: &mut PassTracker,
    ) -> Result<String, RewriteError> {
        let style = request.style();

        let first_prompt = prompts::build_first_prompt(style, request.raw_text());
        transition(tracker, PassState::Pass1Requested);
        let first_raw = self
            .generate(tracker, &first_prompt, request.credential())
            .await?;
        let first_clean = normalizer::normalize_first_pass(&first_raw);
        transition(tracker, PassState::Pass1Cleaned);

        let second_prompt = prompts::build_second_prompt(style, &first_clean);
        transition(tracker, PassState::Pass2Requested);
        let final_raw = self
            .generate(tracker, &second_prompt, request.credential())
            .await?;
        let final_text = normalizer::normalize_final(&final_raw);
        transition(tracker, PassState::Done);

        log::info!(
            "rewrite done: style={} input_chars={} output_chars={}",
            style,
            request.raw_text().chars().count(),
            final_text.chars().count()
        );
        Ok(final_text)
    }

    async fn generate(
        &self,
        tracker: &mut PassTracker,
        prompt: &str,
        credential: &Credential,
    ) -> Result<String, RewriteError> {
        match self.generator.generate(prompt, credential).await {
            Ok(text) => Ok(text),
            Err(failure) => {
                log::warn!(
                    "{} generation failed in {}: {}",
                    self.generator.name(),
                    tracker.state().as_str(),
                    failure
                );
                if let Err(e) = tracker.fail(failure.message.clone()) {
                    log::error!("{e}");
                }
                Err(RewriteError::Generation(failure.message))
            }
        }
    }
}

fn transition(tracker: &mut PassTracker, next: PassState) {
    if let Err(e) = tracker.advance(next) {
        log::error!("{e}");
    }
}
