//! Strict typed decoding of model replies.

use std::sync::LazyLock;

use regex::Regex;
use saasradar_core::{AiOpportunity, AiPattern};
use serde::Deserialize;

use crate::error::AiError;

/// One optional markdown fence around the payload, with an optional language tag.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```[A-Za-z]*[ \t]*\r?\n?(.*?)(?:```)?\s*$").expect("valid regex")
});

#[derive(Deserialize)]
struct PatternsPayload {
    patterns: Vec<AiPattern>,
}

#[derive(Deserialize)]
struct OpportunitiesPayload {
    opportunities: Vec<AiOpportunity>,
}

/// Removes at most one surrounding markdown code fence.
pub(crate) fn strip_fence(text: &str) -> &str {
    let trimmed = text.trim();
    FENCE_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map_or(trimmed, |m| m.as_str().trim())
}

/// Decodes a `{"patterns": [...]}` reply, highest opportunity score first.
///
/// # Errors
///
/// Returns [`AiError::Decode`] when the text is not JSON of that shape.
pub fn decode_patterns(text: &str) -> Result<Vec<AiPattern>, AiError> {
    let payload: PatternsPayload =
        serde_json::from_str(strip_fence(text)).map_err(|e| AiError::Decode {
            context: "AI patterns payload".to_owned(),
            source: e,
        })?;
    let mut patterns = payload.patterns;
    patterns.sort_by(|a, b| b.opportunity_score.total_cmp(&a.opportunity_score));
    Ok(patterns)
}

/// Decodes an `{"opportunities": [...]}` reply, highest validation score first.
///
/// # Errors
///
/// Returns [`AiError::Decode`] when the text is not JSON of that shape.
pub fn decode_opportunities(text: &str) -> Result<Vec<AiOpportunity>, AiError> {
    let payload: OpportunitiesPayload =
        serde_json::from_str(strip_fence(text)).map_err(|e| AiError::Decode {
            context: "AI opportunities payload".to_owned(),
            source: e,
        })?;
    let mut opportunities = payload.opportunities;
    opportunities.sort_by(|a, b| b.validation_score.total_cmp(&a.validation_score));
    Ok(opportunities)
}
