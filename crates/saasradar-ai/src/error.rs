use thiserror::Error;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("AI collaborator is not configured (set GEMINI_API_KEY or GOOGLE_API_KEY)")]
    NotConfigured,

    #[error("AI response contained no text")]
    EmptyResponse,

    #[error("AI API returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("failed to decode {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl AiError {
    /// Wraps a transport error with its request URL removed.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        Self::Http(err.without_url())
    }
}
