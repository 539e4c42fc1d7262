//! Pattern and opportunity extraction with keyword fallback.

use saasradar_core::{AiOpportunity, AiPattern, AnalysisSettings};
use saasradar_signals::{aggregate, Pattern, PostRecord};

use crate::client::{CompletionClient, ResponseFormat};
use crate::decode::{decode_opportunities, decode_patterns};
use crate::error::AiError;
use crate::prompt::{
    competition_prompt, format_posts_for_prompt, opportunity_prompt, pattern_prompt,
    COMPETITION_PROMPT_POSTS, OPPORTUNITY_PROMPT_POSTS,
};

/// Why pattern extraction fell back to keyword aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    RequestFailed(String),
    InvalidPayload(String),
}

impl From<&AiError> for FallbackReason {
    fn from(err: &AiError) -> Self {
        match err {
            AiError::NotConfigured => FallbackReason::NotConfigured,
            AiError::Decode { .. } | AiError::EmptyResponse => {
                FallbackReason::InvalidPayload(err.to_string())
            }
            AiError::Http(_) | AiError::Api { .. } | AiError::InvalidBaseUrl { .. } => {
                FallbackReason::RequestFailed(err.to_string())
            }
        }
    }
}

impl std::fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NotConfigured => write!(f, "AI collaborator not configured"),
            FallbackReason::RequestFailed(msg) => write!(f, "AI request failed: {msg}"),
            FallbackReason::InvalidPayload(msg) => write!(f, "AI payload unusable: {msg}"),
        }
    }
}

/// Result of [`PatternExtractor::extract_patterns`].
#[derive(Debug, Clone, PartialEq)]
pub enum PatternOutcome {
    /// Patterns produced by the model, highest score first.
    Ai(Vec<AiPattern>),
    /// Keyword aggregation used instead of the model.
    KeywordFallback {
        patterns: Vec<Pattern>,
        reason: FallbackReason,
    },
}

impl PatternOutcome {
    /// AI patterns, or `None` when the keyword fallback was used.
    #[must_use]
    pub fn ai_patterns(&self) -> Option<&[AiPattern]> {
        match self {
            PatternOutcome::Ai(patterns) => Some(patterns),
            PatternOutcome::KeywordFallback { .. } => None,
        }
    }
}

/// Drives the AI collaborator over a set of analyzed posts.
///
/// Construct with [`PatternExtractor::new`] when an API key is available, or
/// [`PatternExtractor::disabled`] otherwise. A disabled extractor never makes
/// network calls.
pub struct PatternExtractor<C> {
    client: Option<C>,
    settings: AnalysisSettings,
}

impl<C: CompletionClient> PatternExtractor<C> {
    #[must_use]
    pub fn new(client: C, settings: AnalysisSettings) -> Self {
        Self {
            client: Some(client),
            settings,
        }
    }

    #[must_use]
    pub fn disabled(settings: AnalysisSettings) -> Self {
        Self {
            client: None,
            settings,
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.client.is_some()
    }

    /// Asks the model for recurring needs across `posts`.
    ///
    /// Any failure (no client, request error, unparsable reply) is logged and
    /// answered with keyword aggregation over the same posts.
    pub async fn extract_patterns(
        &self,
        posts: &[PostRecord],
        audience_context: &str,
    ) -> PatternOutcome {
        match self.try_extract_patterns(posts, audience_context).await {
            Ok(patterns) => {
                tracing::info!(patterns = patterns.len(), "AI pattern extraction complete");
                PatternOutcome::Ai(patterns)
            }
            Err(e) => {
                let reason = FallbackReason::from(&e);
                tracing::warn!(
                    error = %e,
                    "AI pattern extraction unavailable, using keyword patterns"
                );
                PatternOutcome::KeywordFallback {
                    patterns: aggregate(posts, self.settings.min_group_size),
                    reason,
                }
            }
        }
    }

    async fn try_extract_patterns(
        &self,
        posts: &[PostRecord],
        audience_context: &str,
    ) -> Result<Vec<AiPattern>, AiError> {
        let client = self.client.as_ref().ok_or(AiError::NotConfigured)?;
        let posts_text = format_posts_for_prompt(posts, self.settings.max_posts);
        let prompt = pattern_prompt(&posts_text, audience_context, self.settings.max_patterns);
        let reply = client.complete(&prompt, ResponseFormat::Json).await?;
        decode_patterns(&reply)
    }

    /// Asks the model for concrete product concepts.
    ///
    /// Returns an empty list on any failure.
    pub async fn generate_opportunities(
        &self,
        posts: &[PostRecord],
        ai_patterns: &[AiPattern],
        audience_context: &str,
    ) -> Vec<AiOpportunity> {
        let result = async {
            let client = self.client.as_ref().ok_or(AiError::NotConfigured)?;
            let posts_text = format_posts_for_prompt(posts, OPPORTUNITY_PROMPT_POSTS);
            let prompt = opportunity_prompt(&posts_text, ai_patterns, audience_context);
            let reply = client.complete(&prompt, ResponseFormat::Json).await?;
            decode_opportunities(&reply)
        }
        .await;

        match result {
            Ok(opportunities) => {
                tracing::info!(
                    opportunities = opportunities.len(),
                    "AI opportunity generation complete"
                );
                opportunities
            }
            Err(e) => {
                tracing::warn!(error = %e, "AI opportunity generation failed");
                Vec::new()
            }
        }
    }

    /// Free-form competitive analysis of `product_idea` against `posts`.
    ///
    /// # Errors
    ///
    /// Returns [`AiError::NotConfigured`] for a disabled extractor, or the
    /// client's error when the request fails.
    pub async fn analyze_competition(
        &self,
        product_idea: &str,
        posts: &[PostRecord],
    ) -> Result<String, AiError> {
        let client = self.client.as_ref().ok_or(AiError::NotConfigured)?;
        let posts_text = format_posts_for_prompt(posts, COMPETITION_PROMPT_POSTS);
        let prompt = competition_prompt(product_idea, &posts_text);
        client.complete(&prompt, ResponseFormat::Text).await
    }
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;
