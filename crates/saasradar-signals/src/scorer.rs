//! Validation scorer: a bounded 0-10 estimate of how strongly a post
//! evidences a viable product opportunity.

use saasradar_core::{Engagement, IntentCategory};

/// Score contribution for each weighted intent.
///
/// Categories not listed contribute nothing.
pub(crate) const INTENT_WEIGHTS: &[(IntentCategory, f64)] = &[
    (IntentCategory::SolutionRequest, 3.0),
    (IntentCategory::PainPoint, 2.0),
    (IntentCategory::WillingnessToPay, 4.0),
    (IntentCategory::AdviceRequest, 1.0),
];

const UPVOTES_PER_POINT: f64 = 50.0;
const COMMENTS_PER_POINT: f64 = 25.0;
const ENGAGEMENT_CAP: f64 = 2.0;
const PAYMENT_WEIGHT: f64 = 0.5;
const PAYMENT_CAP: f64 = 2.0;
const PAIN_WEIGHT: f64 = 0.3;
const PAIN_CAP: f64 = 1.5;
const MAX_SCORE: f64 = 10.0;

/// Compute the validation score for one post.
///
/// Sums intent weights, capped engagement terms, and capped signal-count
/// terms, rounds to one decimal, and clamps to `[0.0, 10.0]`. Monotone
/// non-decreasing in every input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn validation_score(
    intents: &[IntentCategory],
    engagement: Engagement,
    payment_signals: usize,
    pain_signals: usize,
) -> f64 {
    let intent_score: f64 = INTENT_WEIGHTS
        .iter()
        .filter(|(category, _)| intents.contains(category))
        .map(|(_, weight)| weight)
        .sum();

    let upvote_score = (engagement.upvotes as f64 / UPVOTES_PER_POINT).min(ENGAGEMENT_CAP);
    let comment_score = (engagement.comments as f64 / COMMENTS_PER_POINT).min(ENGAGEMENT_CAP);
    let payment_score = (payment_signals as f64 * PAYMENT_WEIGHT).min(PAYMENT_CAP);
    let pain_score = (pain_signals as f64 * PAIN_WEIGHT).min(PAIN_CAP);

    let total = intent_score + upvote_score + comment_score + payment_score + pain_score;
    round_one_decimal(total).clamp(0.0, MAX_SCORE)
}

/// Rounds the exact binary value to one decimal, ties to even.
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
