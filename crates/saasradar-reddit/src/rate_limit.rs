//! Retry with exponential back-off and jitter for Reddit searches.

use std::future::Future;
use std::time::Duration;

use crate::error::RedditError;

const MAX_DELAY_MS: u64 = 60_000;

/// Returns `true` for errors that are worth retrying after a back-off delay.
///
/// Rate limits, network failures, and 5xx responses are transient. Other 4xx
/// responses, malformed bodies, and configuration errors are returned
/// immediately.
pub(crate) fn is_retriable(err: &RedditError) -> bool {
    match err {
        RedditError::RateLimited { .. } => true,
        RedditError::Http(e) => {
            e.is_timeout() || e.is_connect() || e.status().is_some_and(|s| s.is_server_error())
        }
        RedditError::UnexpectedStatus { status, .. } => *status >= 500,
        RedditError::Deserialize { .. } | RedditError::InvalidBaseUrl { .. } => false,
    }
}

/// Runs `operation` with up to `max_retries` additional attempts on transient errors.
///
/// The wait before the n-th retry is `backoff_base_secs * 2^(n-1)` seconds with
/// ±25 % jitter, capped at 60 s.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, RedditError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RedditError>>,
{
    let backoff_base_ms = backoff_base_secs.saturating_mul(1_000);
    let mut attempt = 0u32;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                attempt += 1;
                let computed = backoff_base_ms.saturating_mul(1u64 << (attempt - 1).min(10));
                let capped = computed.min(MAX_DELAY_MS);
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss
                )]
                let delay_ms = (capped as f64 * (rand::random::<f64>() * 0.5 + 0.75)) as u64;
                tracing::warn!(
                    attempt,
                    max_retries,
                    delay_ms,
                    error = %err,
                    "transient Reddit error, retrying after back-off"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }
        }
    }
}
