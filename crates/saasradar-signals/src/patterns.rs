//! Pattern aggregation: grouping analyzed posts by intent category.

use std::collections::BTreeMap;

use saasradar_core::IntentCategory;
use serde::Serialize;

use crate::record::PostRecord;
use crate::scorer::round_one_decimal;

const MAX_EXEMPLARS: usize = 5;

/// Aggregate view of every post sharing one intent category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub category: IntentCategory,
    /// Plural label, e.g. "Pain Points".
    pub name: String,
    pub description: String,
    pub post_count: usize,
    pub total_upvotes: u64,
    pub total_comments: u64,
    /// Mean validation score, rounded to one decimal.
    pub average_validation_score: f64,
    /// Up to five titles, highest score first.
    pub exemplars: Vec<String>,
}

/// Group posts into patterns by intent category.
///
/// A post carrying several intents counts toward each of them. `General`
/// never forms a pattern, and groups smaller than `min_group_size` are
/// dropped. Patterns are ordered by descending post count, ties broken by
/// category declaration order. Deterministic for a given input.
#[must_use]
pub fn aggregate(posts: &[PostRecord], min_group_size: usize) -> Vec<Pattern> {
    let mut groups: BTreeMap<IntentCategory, Vec<&PostRecord>> = BTreeMap::new();
    for post in posts {
        for intent in post.intents() {
            groups.entry(*intent).or_default().push(post);
        }
    }

    let mut patterns: Vec<Pattern> = groups
        .into_iter()
        .filter(|(category, members)| {
            *category != IntentCategory::General && members.len() >= min_group_size
        })
        .map(|(category, members)| build_pattern(category, members))
        .collect();

    // Stable sort over declaration-ordered input keeps category order on ties.
    patterns.sort_by(|a, b| b.post_count.cmp(&a.post_count));

    tracing::debug!(
        posts = posts.len(),
        patterns = patterns.len(),
        "aggregated intent patterns"
    );
    patterns
}

#[allow(clippy::cast_precision_loss)]
fn build_pattern(category: IntentCategory, mut members: Vec<&PostRecord>) -> Pattern {
    let post_count = members.len();
    let total_upvotes = members.iter().map(|p| p.engagement().upvotes).sum();
    let total_comments = members.iter().map(|p| p.engagement().comments).sum();
    let score_sum: f64 = members.iter().map(|p| p.validation_score()).sum();
    let average_validation_score = round_one_decimal(score_sum / post_count as f64);

    members.sort_by(|a, b| b.validation_score().total_cmp(&a.validation_score()));
    let exemplars = members
        .iter()
        .take(MAX_EXEMPLARS)
        .map(|p| p.title().to_string())
        .collect();

    Pattern {
        category,
        name: format!("{}s", category.label()),
        description: format!("Posts expressing {}", category.label().to_lowercase()),
        post_count,
        total_upvotes,
        total_comments,
        average_validation_score,
        exemplars,
    }
}

/// Count posts per intent category, omitting zero counts.
///
/// Rows follow category declaration order and include `General`.
#[must_use]
pub fn theme_summary(posts: &[PostRecord]) -> Vec<(IntentCategory, usize)> {
    IntentCategory::ALL
        .into_iter()
        .map(|category| {
            let count = posts.iter().filter(|p| p.has_intent(category)).count();
            (category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// The first `limit` posts scoring at least `min_score`, in input order.
#[must_use]
pub fn top_validated(posts: &[PostRecord], min_score: f64, limit: usize) -> Vec<&PostRecord> {
    posts
        .iter()
        .filter(|p| p.validation_score() >= min_score)
        .take(limit)
        .collect()
}

#[cfg(test)]
#[path = "patterns_test.rs"]
mod tests;
