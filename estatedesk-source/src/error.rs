//! Error types for the data source layer.

use estatedesk_model::ValidationError;
use thiserror::Error;

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors that can occur while fetching a collection.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Transport-level failure (connect, reset, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The payload was not a JSON array of records.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A record failed its schema rules.
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The request did not finish within the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The source refused to serve; the message is shown as-is.
    #[error("{0}")]
    Unavailable(String),
}

impl SourceError {
    /// Whether a retry could plausibly succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Decode(_) | Self::Invalid(_) | Self::Unavailable(_) => false,
        }
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}
