//! In-memory fixture source.

use crate::error::{SourceError, SourceResult};
use crate::source::{DataSource, validate_all};
use async_trait::async_trait;
use estatedesk_model::Record;
use std::time::Duration;
use tracing::debug;

/// Serves a fixed collection, optionally after a simulated delay.
#[derive(Debug, Clone)]
pub struct FixtureSource<T> {
    name: String,
    outcome: Result<Vec<T>, String>,
    latency: Option<Duration>,
}

impl<T: Record> FixtureSource<T> {
    /// A fixture that always returns `records`.
    pub fn new(records: Vec<T>) -> Self {
        Self {
            name: format!("fixture:{}", T::KIND),
            outcome: Ok(records),
            latency: None,
        }
    }

    /// A fixture that always fails with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            name: format!("fixture:{}", T::KIND),
            outcome: Err(message.into()),
            latency: None,
        }
    }

    /// Delays every fetch by `latency`.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

#[async_trait]
impl<T: Record> DataSource<T> for FixtureSource<T> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch_all(&self) -> SourceResult<Vec<T>> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match &self.outcome {
            Ok(records) => {
                validate_all(records)?;
                debug!("{} served {} records", self.name, records.len());
                Ok(records.clone())
            }
            Err(message) => Err(SourceError::Unavailable(message.clone())),
        }
    }
}
