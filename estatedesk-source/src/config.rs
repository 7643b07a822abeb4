use serde::{Deserialize, Serialize};

/// Configuration for the HTTP data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// API root; collections live under `/api/v1/{collection}`.
    pub base_url: String,
    /// Per-request timeout (ms).
    pub timeout_ms: u64,
    /// Extra attempts after the first failure.
    pub retry_attempts: u32,
    /// Delay before the first retry (ms); grows linearly per attempt.
    pub retry_backoff_ms: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:4010".to_string(),
            timeout_ms: 10_000,
            retry_attempts: 3,
            retry_backoff_ms: 250,
        }
    }
}
