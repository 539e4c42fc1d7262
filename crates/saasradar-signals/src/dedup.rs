//! Merging of posts gathered by several queries.

use std::collections::HashSet;

use crate::record::PostRecord;

/// Drop posts whose title was already seen, keeping the first occurrence.
///
/// Titles compare by exact equality. Idempotent.
pub fn dedup_by_title(posts: &mut Vec<PostRecord>) {
    let mut seen = HashSet::new();
    posts.retain(|post| seen.insert(post.title().to_string()));
}

/// Sort posts by descending validation score. Ties keep their input order.
pub fn rank_by_score(posts: &mut [PostRecord]) {
    posts.sort_by(|a, b| b.validation_score().total_cmp(&a.validation_score()));
}

/// Deduplicate then rank, producing the canonical presentation order.
#[must_use]
pub fn merge_posts(mut posts: Vec<PostRecord>) -> Vec<PostRecord> {
    dedup_by_title(&mut posts);
    rank_by_score(&mut posts);
    posts
}
