//! Reddit collection for SaaS Radar.
//!
//! Searches subreddits through Reddit's public JSON listing, retries
//! transient failures with backoff, and fans out intent-driven searches across
//! an audience's subreddits. Results come back as analyzed [`PostRecord`]s in
//! presentation order.
//!
//! [`PostRecord`]: saasradar_signals::PostRecord

pub mod client;
pub mod collect;
pub mod error;
pub mod queries;

mod rate_limit;
mod types;

pub use client::RedditClient;
pub use collect::{collect_posts, search_by_intent, CollectOptions, CollectedPosts};
pub use error::RedditError;
pub use queries::intent_queries;
