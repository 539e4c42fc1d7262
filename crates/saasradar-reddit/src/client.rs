//! HTTP client for Reddit's public subreddit search listing.

use std::time::Duration;

use reqwest::{Client, Url};
use saasradar_core::RawPost;

use crate::error::RedditError;
use crate::rate_limit::retry_with_backoff;
use crate::types::{Listing, PostData};

const DEFAULT_BASE_URL: &str = "https://www.reddit.com/";
const PERMALINK_ORIGIN: &str = "https://www.reddit.com";
const MAX_TITLE_CHARS: usize = 300;
const MAX_BODY_CHARS: usize = 1_000;
const MIN_TITLE_CHARS: usize = 10;
const MAX_LIMIT: u32 = 100;

/// Client for `/r/{subreddit}/search.json`.
///
/// Holds the HTTP connection pool and retry policy. Use [`RedditClient::new`]
/// for production or [`RedditClient::with_base_url`] to point at a mock
/// server in tests.
pub struct RedditClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl RedditClient {
    /// Creates a client pointed at `www.reddit.com`.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, RedditError> {
        Self::with_base_url(
            timeout_secs,
            user_agent,
            max_retries,
            backoff_base_secs,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RedditError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
        base_url: &str,
    ) -> Result<Self, RedditError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| RedditError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Searches one subreddit and returns its posts as raw records.
    ///
    /// `limit` is clamped to `1..=100`. Posts with a title of ten characters
    /// or fewer are skipped, titles and bodies are truncated, and deleted or
    /// removed bodies come back empty.
    ///
    /// # Errors
    ///
    /// - [`RedditError::RateLimited`] on HTTP 429 after all retries.
    /// - [`RedditError::UnexpectedStatus`] on any other non-2xx status (5xx retried).
    /// - [`RedditError::Http`] on network failure after all retries.
    /// - [`RedditError::Deserialize`] if the body is not a search listing.
    pub async fn search_subreddit(
        &self,
        subreddit: &str,
        query: &str,
        sort: &str,
        time_filter: &str,
        limit: u32,
    ) -> Result<Vec<RawPost>, RedditError> {
        let url = self.search_url(subreddit, query, sort, time_filter, limit)?;

        let listing = retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(60);
                    return Err(RedditError::RateLimited {
                        subreddit: subreddit.to_owned(),
                        retry_after_secs,
                    });
                }

                if !status.is_success() {
                    return Err(RedditError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<Listing>(&body).map_err(|e| RedditError::Deserialize {
                    context: format!("search listing for r/{subreddit} (q={query})"),
                    source: e,
                })
            }
        })
        .await?;

        let posts: Vec<RawPost> = listing
            .data
            .children
            .into_iter()
            .filter_map(|child| to_raw_post(child.data, subreddit))
            .collect();

        tracing::debug!(
            subreddit,
            query,
            posts = posts.len(),
            "searched subreddit"
        );

        Ok(posts)
    }

    fn search_url(
        &self,
        subreddit: &str,
        query: &str,
        sort: &str,
        time_filter: &str,
        limit: u32,
    ) -> Result<Url, RedditError> {
        let mut url = self
            .base_url
            .join(&format!("r/{subreddit}/search.json"))
            .map_err(|e| RedditError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("sort", sort)
            .append_pair("restrict_sr", "1")
            .append_pair("t", time_filter)
            .append_pair("limit", &limit.clamp(1, MAX_LIMIT).to_string())
            .append_pair("raw_json", "1");
        Ok(url)
    }
}

fn to_raw_post(data: PostData, subreddit: &str) -> Option<RawPost> {
    let title = data.title.as_deref().map(str::trim).unwrap_or_default();
    if title.chars().count() <= MIN_TITLE_CHARS {
        return None;
    }

    let body = data
        .selftext
        .as_deref()
        .map(str::trim)
        .filter(|body| *body != "[deleted]" && *body != "[removed]")
        .map(|body| truncate(body, MAX_BODY_CHARS))
        .unwrap_or_default();

    let url = data
        .permalink
        .as_deref()
        .map(|p| {
            if p.starts_with("http") {
                p.to_owned()
            } else {
                format!("{PERMALINK_ORIGIN}{p}")
            }
        })
        .unwrap_or_default();

    #[allow(clippy::cast_possible_truncation)]
    let timestamp = data
        .created_utc
        .and_then(|secs| chrono::DateTime::from_timestamp(secs as i64, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default();

    Some(RawPost {
        title: truncate(title, MAX_TITLE_CHARS),
        body,
        source: data.subreddit.unwrap_or_else(|| subreddit.to_owned()),
        author: data.author.unwrap_or_default(),
        url,
        timestamp,
        upvotes: data.score.unwrap_or(0),
        comments: data.num_comments.unwrap_or(0),
    })
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
