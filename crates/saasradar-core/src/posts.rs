use serde::{Deserialize, Serialize};

/// Engagement counters for one post. Both counts are non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub upvotes: u64,
    pub comments: u64,
}

impl Engagement {
    /// Build from raw collector counts, clamping negatives to zero.
    ///
    /// Reddit scores can drop below zero; the model only tracks `>= 0`.
    #[must_use]
    pub fn from_raw(upvotes: i64, comments: i64) -> Self {
        Self {
            upvotes: u64::try_from(upvotes).unwrap_or(0),
            comments: u64::try_from(comments).unwrap_or(0),
        }
    }
}

/// A post as handed over by a collector, before classification.
///
/// Everything except `title` is opaque metadata. Records with an empty title
/// are dropped at the normalization boundary, so `title` also defaults to
/// empty rather than failing the whole batch on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Origin identifier, usually the subreddit name.
    #[serde(default, alias = "subreddit")]
    pub source: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub upvotes: i64,
    #[serde(default)]
    pub comments: i64,
}
