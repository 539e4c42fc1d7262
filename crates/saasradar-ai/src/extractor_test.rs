use std::future::Future;
use std::sync::Mutex;

use saasradar_core::{IntentCategory, RawPost};

use super::*;

/// Replies with a canned body (or a 500) and records every prompt.
struct StubClient {
    reply: Option<String>,
    prompts: Mutex<Vec<(String, ResponseFormat)>>,
}

impl StubClient {
    fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_owned()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<(String, ResponseFormat)> {
        self.prompts.lock().unwrap().clone()
    }
}

impl CompletionClient for StubClient {
    fn complete(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> impl Future<Output = Result<String, AiError>> + Send {
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_owned(), format));
        let result = match &self.reply {
            Some(text) => Ok(text.clone()),
            None => Err(AiError::Api {
                status: 500,
                body: "internal".to_owned(),
            }),
        };
        std::future::ready(result)
    }

    fn model_name(&self) -> &str {
        "stub"
    }
}

fn post(title: &str) -> PostRecord {
    PostRecord::from_raw(RawPost {
        title: title.to_owned(),
        source: "freelance".to_owned(),
        ..RawPost::default()
    })
    .unwrap()
}

fn pain_posts() -> Vec<PostRecord> {
    vec![
        post("Frustrated with invoicing every month"),
        post("Tired of chasing late payments"),
        post("Annoying contract templates everywhere"),
    ]
}

fn settings() -> AnalysisSettings {
    AnalysisSettings::default()
}

#[tokio::test]
async fn ai_patterns_are_returned_when_reply_decodes() {
    let client = StubClient::replying(
        r#"```json
{"patterns": [
  {"name": "Invoice chasing", "opportunity_score": 6.0},
  {"name": "Contract templates", "opportunity_score": 8.0}
]}
```"#,
    );
    let extractor = PatternExtractor::new(client, settings());

    let outcome = extractor.extract_patterns(&pain_posts(), "Freelancers").await;

    let PatternOutcome::Ai(patterns) = outcome else {
        panic!("expected AI outcome, got {outcome:?}");
    };
    assert_eq!(patterns[0].name, "Contract templates");
    assert_eq!(patterns[1].name, "Invoice chasing");

    let prompts = extractor.client.as_ref().unwrap().prompts();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].1, ResponseFormat::Json);
    assert!(prompts[0].0.contains("CONTEXT: Freelancers"));
    assert!(prompts[0].0.contains("Title: Tired of chasing late payments"));
}

#[tokio::test]
async fn unparsable_reply_falls_back_to_keyword_patterns() {
    let extractor =
        PatternExtractor::new(StubClient::replying("I cannot help with that."), settings());

    let outcome = extractor.extract_patterns(&pain_posts(), "").await;

    match outcome {
        PatternOutcome::KeywordFallback { patterns, reason } => {
            assert!(matches!(reason, FallbackReason::InvalidPayload(_)));
            assert_eq!(patterns.len(), 1);
            assert_eq!(patterns[0].category, IntentCategory::PainPoint);
            assert_eq!(patterns[0].post_count, 3);
        }
        PatternOutcome::Ai(_) => panic!("expected keyword fallback"),
    }
}

#[tokio::test]
async fn request_failure_falls_back_to_keyword_patterns() {
    let extractor = PatternExtractor::new(StubClient::failing(), settings());
    let outcome = extractor.extract_patterns(&pain_posts(), "").await;
    assert!(matches!(
        outcome,
        PatternOutcome::KeywordFallback {
            reason: FallbackReason::RequestFailed(_),
            ..
        }
    ));
    assert!(outcome.ai_patterns().is_none());
}

#[tokio::test]
async fn disabled_extractor_falls_back_without_calling_client() {
    let extractor = PatternExtractor::<StubClient>::disabled(settings());
    assert!(!extractor.is_enabled());

    let outcome = extractor.extract_patterns(&pain_posts(), "").await;
    assert_eq!(
        outcome,
        PatternOutcome::KeywordFallback {
            patterns: aggregate(&pain_posts(), 2),
            reason: FallbackReason::NotConfigured,
        }
    );
}

#[tokio::test]
async fn fallback_on_empty_posts_is_empty() {
    let extractor = PatternExtractor::<StubClient>::disabled(settings());
    let outcome = extractor.extract_patterns(&[], "").await;
    match outcome {
        PatternOutcome::KeywordFallback { patterns, .. } => assert!(patterns.is_empty()),
        PatternOutcome::Ai(_) => panic!("expected keyword fallback"),
    }
}

#[tokio::test]
async fn opportunities_include_pattern_summaries() {
    let client = StubClient::replying(
        r#"{"opportunities": [
            {"name": "InvoiceNudge", "validation_score": 7.0},
            {"name": "ClauseKit", "validation_score": 8.2}
        ]}"#,
    );
    let extractor = PatternExtractor::new(client, settings());
    let patterns = vec![AiPattern {
        name: "Invoice chasing".to_owned(),
        description: "Late payers".to_owned(),
        problem_statement: String::new(),
        target_audience: String::new(),
        post_count: 3,
        validation_signals: Vec::new(),
        example_quotes: Vec::new(),
        competition_notes: String::new(),
        opportunity_score: 6.5,
        recommended_features: Vec::new(),
        monetization_potential: String::new(),
    }];

    let opportunities = extractor
        .generate_opportunities(&pain_posts(), &patterns, "")
        .await;

    assert_eq!(opportunities.len(), 2);
    assert_eq!(opportunities[0].name, "ClauseKit");
    let prompts = extractor.client.as_ref().unwrap().prompts();
    assert!(prompts[0]
        .0
        .contains("- Invoice chasing: Late payers (Score: 6.5)"));
}

#[tokio::test]
async fn opportunity_failure_yields_empty_list() {
    let failing = PatternExtractor::new(StubClient::failing(), settings());
    assert!(failing
        .generate_opportunities(&pain_posts(), &[], "")
        .await
        .is_empty());

    let garbage = PatternExtractor::new(StubClient::replying("{\"patterns\": []}"), settings());
    assert!(garbage
        .generate_opportunities(&pain_posts(), &[], "")
        .await
        .is_empty());

    let disabled = PatternExtractor::<StubClient>::disabled(settings());
    assert!(disabled
        .generate_opportunities(&pain_posts(), &[], "")
        .await
        .is_empty());
}

#[tokio::test]
async fn competition_analysis_uses_text_format() {
    let extractor = PatternExtractor::new(
        StubClient::replying("Competition is Medium."),
        settings(),
    );
    let analysis = extractor
        .analyze_competition("Invoice reminder bot", &pain_posts())
        .await
        .unwrap();
    assert_eq!(analysis, "Competition is Medium.");

    let prompts = extractor.client.as_ref().unwrap().prompts();
    assert_eq!(prompts[0].1, ResponseFormat::Text);
    assert!(prompts[0].0.contains("PRODUCT IDEA: Invoice reminder bot"));
}

#[tokio::test]
async fn competition_analysis_requires_client() {
    let extractor = PatternExtractor::<StubClient>::disabled(settings());
    let result = extractor.analyze_competition("anything", &[]).await;
    assert!(matches!(result, Err(AiError::NotConfigured)));
}

#[test]
fn fallback_reason_classifies_errors() {
    assert_eq!(
        FallbackReason::from(&AiError::NotConfigured),
        FallbackReason::NotConfigured
    );
    assert!(matches!(
        FallbackReason::from(&AiError::EmptyResponse),
        FallbackReason::InvalidPayload(_)
    ));
    assert!(matches!(
        FallbackReason::from(&AiError::Api {
            status: 429,
            body: String::new()
        }),
        FallbackReason::RequestFailed(_)
    ));
}
