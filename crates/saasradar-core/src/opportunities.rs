//! Structured payloads returned by the generative-AI collaborator.
//!
//! `name` and the score are required; every other field may be omitted by the
//! model and falls back to an empty value. A wrong type anywhere (for example a
//! string score) fails the whole decode.

use serde::{Deserialize, Serialize};

/// A pattern of common needs identified by the AI collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiPattern {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub post_count: u32,
    #[serde(default)]
    pub validation_signals: Vec<String>,
    #[serde(default)]
    pub example_quotes: Vec<String>,
    #[serde(default)]
    pub competition_notes: String,
    /// 0-10, as judged by the model.
    pub opportunity_score: f64,
    #[serde(default)]
    pub recommended_features: Vec<String>,
    #[serde(default)]
    pub monetization_potential: String,
}

/// A product concept generated by the AI collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiOpportunity {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub problem: String,
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub target_market: String,
    #[serde(default)]
    pub market_size_indicator: String,
    /// 0-10, as judged by the model.
    pub validation_score: f64,
    #[serde(default)]
    pub pain_evidence: Vec<String>,
    #[serde(default)]
    pub payment_evidence: Vec<String>,
    #[serde(default)]
    pub competition_analysis: String,
    #[serde(default)]
    pub mvp_features: Vec<String>,
    #[serde(default)]
    pub pricing_suggestion: String,
}
