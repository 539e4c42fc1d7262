//! Intent-driven collection across subreddits.

use std::time::Duration;

use futures::stream::{self, StreamExt};
use saasradar_core::IntentCategory;
use saasradar_signals::{merge_posts, PostRecord};

use crate::client::RedditClient;
use crate::error::RedditError;
use crate::queries::intent_queries;

/// Number of phrases from an intent's query table used per search.
const QUERIES_PER_INTENT: usize = 3;

/// Knobs for a collection run.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Reddit sort order: `relevance`, `new`, `top`, ...
    pub sort: String,
    /// Reddit time window: `hour`, `day`, `week`, `month`, `year`, `all`.
    pub time_filter: String,
    /// Pause between consecutive queries of one intent search.
    pub inter_request_delay_ms: u64,
    /// Upper bound on (subreddit, intent) searches in flight.
    pub max_concurrent_searches: usize,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            sort: "relevance".to_string(),
            time_filter: "year".to_string(),
            inter_request_delay_ms: 1_000,
            max_concurrent_searches: 1,
        }
    }
}

/// Merged result of a multi-subreddit collection.
#[derive(Debug, Clone)]
pub struct CollectedPosts {
    /// Deduplicated, in presentation order.
    pub posts: Vec<PostRecord>,
    pub searches: usize,
    pub failed_searches: usize,
}

/// Search one subreddit with the first three queries of an intent's table.
///
/// Each query asks for `max(max_posts / 3, 1)` posts. Results are normalized,
/// deduplicated by title, and ranked by score.
///
/// # Errors
///
/// Returns the first [`RedditError`] raised by any query.
pub async fn search_by_intent(
    client: &RedditClient,
    subreddit: &str,
    intent: IntentCategory,
    max_posts: usize,
    options: &CollectOptions,
) -> Result<Vec<PostRecord>, RedditError> {
    let per_query = per_query_limit(max_posts);
    let mut collected = Vec::new();

    for (index, query) in intent_queries(intent)
        .iter()
        .take(QUERIES_PER_INTENT)
        .enumerate()
    {
        if index > 0 && options.inter_request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(options.inter_request_delay_ms)).await;
        }

        let raws = client
            .search_subreddit(
                subreddit,
                query,
                &options.sort,
                &options.time_filter,
                per_query,
            )
            .await?;
        collected.extend(PostRecord::from_raw_batch(raws));
    }

    let merged = merge_posts(collected);
    tracing::debug!(
        subreddit,
        intent = %intent,
        posts = merged.len(),
        "intent search complete"
    );
    Ok(merged)
}

/// Search every (subreddit, intent) combination and merge the results.
///
/// Each combination asks for `max(max_posts_per_source / intents.len(), 1)`
/// posts. Searches run with bounded concurrency through an order-preserving
/// buffer, so the merged order does not depend on network timing. Failed
/// combinations are logged and skipped.
pub async fn collect_posts(
    client: &RedditClient,
    sources: &[String],
    intents: &[IntentCategory],
    max_posts_per_source: usize,
    options: &CollectOptions,
) -> CollectedPosts {
    if sources.is_empty() || intents.is_empty() {
        return CollectedPosts {
            posts: Vec::new(),
            searches: 0,
            failed_searches: 0,
        };
    }

    let per_intent = (max_posts_per_source / intents.len()).max(1);
    let combinations: Vec<(&str, IntentCategory)> = sources
        .iter()
        .flat_map(|source| intents.iter().map(move |intent| (source.as_str(), *intent)))
        .collect();
    let searches = combinations.len();

    tracing::info!(
        sources = sources.len(),
        intents = intents.len(),
        searches,
        per_intent,
        "collecting posts"
    );

    let results: Vec<((&str, IntentCategory), Result<Vec<PostRecord>, RedditError>)> =
        stream::iter(combinations)
            .map(|(source, intent)| async move {
                let result = search_by_intent(client, source, intent, per_intent, options).await;
                ((source, intent), result)
            })
            .buffered(options.max_concurrent_searches.max(1))
            .collect()
            .await;

    let mut all_posts = Vec::new();
    let mut failed_searches = 0;
    for ((source, intent), result) in results {
        match result {
            Ok(posts) => all_posts.extend(posts),
            Err(e) => {
                failed_searches += 1;
                tracing::warn!(
                    subreddit = source,
                    intent = %intent,
                    error = %e,
                    "subreddit search failed"
                );
            }
        }
    }

    if failed_searches > 0 {
        tracing::warn!(failed_searches, searches, "some searches failed during collection");
    }

    let posts = merge_posts(all_posts);
    tracing::info!(posts = posts.len(), "collection complete");

    CollectedPosts {
        posts,
        searches,
        failed_searches,
    }
}

fn per_query_limit(max_posts: usize) -> u32 {
    u32::try_from((max_posts / QUERIES_PER_INTENT).max(1)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_query_limit_divides_by_three_with_floor_of_one() {
        assert_eq!(per_query_limit(25), 8);
        assert_eq!(per_query_limit(3), 1);
        assert_eq!(per_query_limit(2), 1);
        assert_eq!(per_query_limit(0), 1);
    }

    #[test]
    fn default_options_match_reddit_defaults() {
        let options = CollectOptions::default();
        assert_eq!(options.sort, "relevance");
        assert_eq!(options.time_filter, "year");
        assert_eq!(options.max_concurrent_searches, 1);
    }
}
