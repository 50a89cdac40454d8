//! リライトパイプラインの統合テスト（公開 API 経由）

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rp_core::domain::request::{Credential, RewriteRequest};
use rp_core::domain::style::Style;
use rp_core::infra::generator::{GeminiConfig, GeminiGenerator, GenerationFailure, TextGenerator};
use rp_core::infra::normalizer::normalize_first_pass;
use rp_core::usecase::pipeline::RewritePipeline;

struct StubGenerator {
    replies: Mutex<VecDeque<Result<String, GenerationFailure>>>,
    prompts: Mutex<Vec<String>>,
}

impl StubGenerator {
    fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(GenerationFailure::new))
                    .collect(),
            ),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(
        &self,
        prompt: &str,
        _credential: &Credential,
    ) -> Result<String, GenerationFailure> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GenerationFailure::new("unexpected call")))
    }

    fn name(&self) -> &str {
        "stub"
    }
}

const BUSINESS_PASS1: &str = "Here's the rewritten text: \"Subject: Update\nThe meeting has been moved to 3pm.\"\n\nNote: let me know if needed.";
const BUSINESS_PASS2: &str = "The meeting has been moved to 3pm.";

#[tokio::test]
async fn business_rewrite_end_to_end() {
    let generator = StubGenerator::new(vec![Ok(BUSINESS_PASS1), Ok(BUSINESS_PASS2)]);
    let pipeline = RewritePipeline::new(generator.clone());

    let result = pipeline
        .rewrite_text("Meeting moved to 3pm", "business", "test-api-key")
        .await
        .unwrap();

    assert_eq!(result, "The meeting has been moved to 3pm.");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].contains("Meeting moved to 3pm"));
    assert!(prompts[0].contains("business"));
    assert!(prompts[1].contains(&normalize_first_pass(BUSINESS_PASS1)));
    assert!(prompts[1].contains("The meeting has been moved to 3pm."));
    // 1 パス目の整形では末尾の Note を残す
    assert!(prompts[1].contains("Note: let me know if needed."));
    assert!(!prompts[1].contains("Here's the rewritten text"));
}

#[tokio::test]
async fn first_call_failure_rejects_without_second_call() {
    let generator = StubGenerator::new(vec![Err("stub error message")]);
    let pipeline = RewritePipeline::new(generator.clone());

    let err = pipeline
        .rewrite_text("hello", "developer", "k")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to process text: stub error message");
    assert_eq!(generator.prompts().len(), 1);
}

#[tokio::test]
async fn second_call_failure_rejects_after_two_calls() {
    let generator = StubGenerator::new(vec![Ok("first"), Err("stub error message")]);
    let pipeline = RewritePipeline::new(generator.clone());

    let err = pipeline
        .rewrite_text("hello", "friendly", "k")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to process text: stub error message");
    assert_eq!(generator.prompts().len(), 2);
}

#[tokio::test]
async fn concurrent_invocations_do_not_share_state() {
    let generator_a = StubGenerator::new(vec![Ok("a1"), Ok("a2")]);
    let generator_b = StubGenerator::new(vec![Ok("b1"), Ok("b2")]);
    let pipeline_a = RewritePipeline::new(generator_a.clone());
    let pipeline_b = RewritePipeline::new(generator_b.clone());

    let request_a = RewriteRequest::new("alpha", Style::GenZ, Credential::new("k")).unwrap();
    let request_b = RewriteRequest::new("beta", Style::Developer, Credential::new("k")).unwrap();

    let (a, b) = tokio::join!(pipeline_a.rewrite(&request_a), pipeline_b.rewrite(&request_b));

    assert_eq!(a.unwrap(), "a2");
    assert_eq!(b.unwrap(), "b2");
    assert!(generator_a.prompts()[1].contains("\"a1\""));
    assert!(generator_b.prompts()[1].contains("\"b1\""));
}

#[tokio::test]
async fn gemini_two_pass_against_mock_server() {
    let server = MockServer::start().await;
    let generate_path = "/v1beta/models/gemini-2.0-flash:generateContent";

    Mock::given(method("POST"))
        .and(path(generate_path))
        .and(header("x-goog-api-key", "test-api-key"))
        .and(body_string_contains("Original text:"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "```\nHere's the rewritten text: Deploy went fine.\n```"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(generate_path))
        .and(body_string_contains("Text to rewrite:"))
        .and(body_string_contains("Deploy went fine."))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "deploy went fine 👍\n\nPS: ping me"}]}}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiGenerator::new(GeminiConfig {
        base_url: server.uri(),
        timeout: Duration::from_secs(5),
        ..Default::default()
    })
    .unwrap();
    let pipeline = RewritePipeline::new(Arc::new(generator));

    let result = pipeline
        .rewrite_text("deploy ok", "developer", "test-api-key")
        .await
        .unwrap();

    assert_eq!(result, "deploy went fine 👍");
}

#[tokio::test]
async fn gemini_auth_error_is_wrapped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": {"code": 403, "message": "Permission denied", "status": "PERMISSION_DENIED"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = GeminiGenerator::new(GeminiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
    .unwrap();
    let pipeline = RewritePipeline::new(Arc::new(generator));

    let err = pipeline
        .rewrite_text("hello", "business", "bad-key")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to process text: Permission denied");
}
