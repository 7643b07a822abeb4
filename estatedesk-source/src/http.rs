//! HTTP data source backed by `reqwest`.

use crate::config::SourceConfig;
use crate::error::{SourceError, SourceResult};
use crate::source::{DataSource, validate_all};
use async_trait::async_trait;
use estatedesk_model::Record;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::{debug, warn};

/// Fetches a collection from `GET {base_url}/api/v1/{collection}`.
///
/// Network errors, timeouts and 5xx responses are retried up to
/// `retry_attempts` times. 4xx responses and undecodable or invalid
/// payloads fail immediately.
pub struct HttpSource<T> {
    client: reqwest::Client,
    url: String,
    retry_attempts: u32,
    retry_backoff: Duration,
    _record: PhantomData<fn() -> T>,
}

/// Builds a client honouring the configured timeout, for sharing between sources.
pub fn http_client(config: &SourceConfig) -> SourceResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_millis(config.timeout_ms))
        .build()?)
}

impl<T: Record> HttpSource<T> {
    /// Builds a source for `T`'s collection.
    pub fn new(config: &SourceConfig) -> SourceResult<Self> {
        Ok(Self::with_client(http_client(config)?, config))
    }

    /// Builds a source sharing an existing client.
    pub fn with_client(client: reqwest::Client, config: &SourceConfig) -> Self {
        let url = format!(
            "{}/api/v1/{}",
            config.base_url.trim_end_matches('/'),
            T::KIND.as_str()
        );
        Self {
            client,
            url,
            retry_attempts: config.retry_attempts,
            retry_backoff: Duration::from_millis(config.retry_backoff_ms),
            _record: PhantomData,
        }
    }

    /// The collection URL this source reads.
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_once(&self) -> SourceResult<Vec<T>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        let body = response.bytes().await?;
        let records: Vec<T> = serde_json::from_slice(&body)?;
        validate_all(&records)?;
        Ok(records)
    }
}

#[async_trait]
impl<T: Record> DataSource<T> for HttpSource<T> {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_all(&self) -> SourceResult<Vec<T>> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(records) => {
                    debug!("GET {} -> {} records", self.url, records.len());
                    return Ok(records);
                }
                Err(e) if e.is_retryable() && attempt < self.retry_attempts => {
                    attempt += 1;
                    warn!(
                        "GET {} failed ({}), retry {}/{}",
                        self.url, e, attempt, self.retry_attempts
                    );
                    tokio::time::sleep(self.retry_backoff * attempt).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
