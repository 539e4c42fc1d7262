use saasradar_core::{Engagement, IntentCategory, RawPost};
use serde::Serialize;

use crate::classify::classify;
use crate::extract::extract_signals;
use crate::scorer::validation_score;

/// One analyzed post: raw metadata plus derived intents, signals, and score.
///
/// Fields are read-only. Intents and signals are derived once from title and
/// body; the score is derived from those plus engagement and is recomputed by
/// [`PostRecord::set_engagement`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRecord {
    title: String,
    body: String,
    source: String,
    author: String,
    url: String,
    timestamp: String,
    engagement: Engagement,
    intents: Vec<IntentCategory>,
    payment_signals: Vec<String>,
    pain_signals: Vec<String>,
    validation_score: f64,
}

impl PostRecord {
    /// Normalize a collector record into an analyzed post.
    ///
    /// Returns `None` when the title is empty after trimming. Negative
    /// engagement counts clamp to zero.
    #[must_use]
    pub fn from_raw(raw: RawPost) -> Option<Self> {
        let title = raw.title.trim().to_string();
        if title.is_empty() {
            tracing::debug!(source = %raw.source, url = %raw.url, "dropping post with empty title");
            return None;
        }

        let text = format!("{title} {}", raw.body);
        let intents = classify(&text);
        let signals = extract_signals(&text);
        let engagement = Engagement::from_raw(raw.upvotes, raw.comments);
        let validation_score =
            validation_score(&intents, engagement, signals.payment.len(), signals.pain.len());

        Some(Self {
            title,
            body: raw.body,
            source: raw.source,
            author: raw.author,
            url: raw.url,
            timestamp: raw.timestamp,
            engagement,
            intents,
            payment_signals: signals.payment.into_iter().map(str::to_string).collect(),
            pain_signals: signals.pain.into_iter().map(str::to_string).collect(),
            validation_score,
        })
    }

    /// Normalize a batch, dropping records without a title.
    #[must_use]
    pub fn from_raw_batch(raws: impl IntoIterator<Item = RawPost>) -> Vec<Self> {
        raws.into_iter().filter_map(Self::from_raw).collect()
    }

    /// Replace engagement counters and recompute the validation score.
    pub fn set_engagement(&mut self, engagement: Engagement) {
        self.engagement = engagement;
        self.validation_score = validation_score(
            &self.intents,
            engagement,
            self.payment_signals.len(),
            self.pain_signals.len(),
        );
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Origin identifier, usually the subreddit name.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    #[must_use]
    pub fn engagement(&self) -> Engagement {
        self.engagement
    }

    /// Never empty; `[General]` when nothing else matched.
    #[must_use]
    pub fn intents(&self) -> &[IntentCategory] {
        &self.intents
    }

    #[must_use]
    pub fn has_intent(&self, category: IntentCategory) -> bool {
        self.intents.contains(&category)
    }

    #[must_use]
    pub fn payment_signals(&self) -> &[String] {
        &self.payment_signals
    }

    #[must_use]
    pub fn pain_signals(&self) -> &[String] {
        &self.pain_signals
    }

    #[must_use]
    pub fn validation_score(&self) -> f64 {
        self.validation_score
    }
}
