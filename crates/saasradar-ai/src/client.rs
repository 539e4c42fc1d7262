//! Completion clients for the generative-AI collaborator.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::error::AiError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const MAX_ERROR_BODY_CHARS: usize = 500;
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Shape the caller expects the completion text to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Text,
}

/// A hosted model that turns a prompt into text.
pub trait CompletionClient: Send + Sync {
    /// Sends `prompt` and returns the model's text reply.
    fn complete(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> impl Future<Output = Result<String, AiError>> + Send;

    fn model_name(&self) -> &str;
}

/// Client for the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    base_url: Url,
    model: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Creates a client pointed at the public Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, AiError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AiError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed, or [`AiError::InvalidBaseUrl`] if `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, AiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(AiError::from_reqwest)?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AiError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            model: model.to_owned(),
            api_key: api_key.to_owned(),
        })
    }

    fn generate_url(&self) -> Result<Url, AiError> {
        self.base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|e| AiError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    async fn generate(&self, prompt: &str, format: ResponseFormat) -> Result<String, AiError> {
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
            generation_config: match format {
                ResponseFormat::Json => Some(GenerationConfig {
                    response_mime_type: "application/json",
                }),
                ResponseFormat::Text => None,
            },
        };

        let response = self
            .client
            .post(self.generate_url()?)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(AiError::from_reqwest)?;
        let status = response.status();
        let body = response.text().await.map_err(AiError::from_reqwest)?;

        if !status.is_success() {
            return Err(AiError::Api {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let decoded: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| AiError::Decode {
                context: format!("generateContent response from {}", self.model),
                source: e,
            })?;

        let text: String = decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::EmptyResponse);
        }

        tracing::debug!(
            model = %self.model,
            chars = text.len(),
            "received completion"
        );
        Ok(text)
    }
}

impl CompletionClient for GeminiClient {
    fn complete(
        &self,
        prompt: &str,
        format: ResponseFormat,
    ) -> impl Future<Output = Result<String, AiError>> + Send {
        self.generate(prompt, format)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
