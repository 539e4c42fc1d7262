//! Integration tests for `GeminiClient` and the extractor using wiremock HTTP mocks.

use saasradar_ai::{
    AiError, CompletionClient, GeminiClient, PatternExtractor, PatternOutcome, ResponseFormat,
};
use saasradar_core::{AnalysisSettings, RawPost};
use saasradar_signals::PostRecord;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "test-model";
const GENERATE_PATH: &str = "/v1beta/models/test-model:generateContent";

fn test_client(base_url: &str) -> GeminiClient {
    GeminiClient::with_base_url("test-key", MODEL, 30, base_url)
        .expect("client construction should not fail")
}

fn reply(parts: &[&str]) -> serde_json::Value {
    let parts: Vec<serde_json::Value> = parts
        .iter()
        .map(|text| serde_json::json!({ "text": text }))
        .collect();
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": parts } }]
    })
}

fn posts() -> Vec<PostRecord> {
    [
        "Looking for a tool to manage multiple Airbnb listings",
        "Frustrated with PriceLabs, need an alternative",
        "Frustrated with guest messaging across channels",
    ]
    .into_iter()
    .filter_map(|title| {
        PostRecord::from_raw(RawPost {
            title: title.to_owned(),
            source: "airbnb_hosts".to_owned(),
            upvotes: 20,
            comments: 5,
            ..RawPost::default()
        })
    })
    .collect()
}

#[tokio::test]
async fn complete_sends_prompt_and_joins_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "hello" }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(&["{\"a\":", "1}"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let text = client
        .complete("hello", ResponseFormat::Json)
        .await
        .expect("completion should succeed");

    assert_eq!(text, "{\"a\":1}");
    assert_eq!(client.model_name(), MODEL);
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .complete("hello", ResponseFormat::Text)
        .await;

    match result {
        Err(AiError::Api { status, body }) => {
            assert_eq!(status, 403);
            assert_eq!(body, "API key not valid");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_candidates_is_empty_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })),
        )
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .complete("hello", ResponseFormat::Text)
        .await;
    assert!(matches!(result, Err(AiError::EmptyResponse)));
}

#[tokio::test]
async fn non_json_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = test_client(&server.uri())
        .complete("hello", ResponseFormat::Text)
        .await;
    assert!(matches!(result, Err(AiError::Decode { .. })));
}

#[tokio::test]
async fn extractor_decodes_patterns_from_gemini() {
    let server = MockServer::start().await;
    let payload = r#"```json
{"patterns": [{"name": "Multi-listing management", "opportunity_score": 7.5, "post_count": 2}]}
```"#;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply(&[payload])))
        .mount(&server)
        .await;

    let extractor = PatternExtractor::new(test_client(&server.uri()), AnalysisSettings::default());
    let outcome = extractor.extract_patterns(&posts(), "Airbnb Hosts").await;

    let patterns = outcome.ai_patterns().expect("AI outcome expected");
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].name, "Multi-listing management");
    assert_eq!(patterns[0].post_count, 2);
}

#[tokio::test]
async fn extractor_falls_back_when_gemini_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let extractor = PatternExtractor::new(test_client(&server.uri()), AnalysisSettings::default());
    let outcome = extractor.extract_patterns(&posts(), "").await;

    match outcome {
        PatternOutcome::KeywordFallback { patterns, .. } => {
            assert!(patterns
                .iter()
                .any(|p| p.name == "Pain Points" && p.post_count == 2));
        }
        PatternOutcome::Ai(_) => panic!("expected keyword fallback"),
    }

    let opportunities = extractor.generate_opportunities(&posts(), &[], "").await;
    assert!(opportunities.is_empty());
}
