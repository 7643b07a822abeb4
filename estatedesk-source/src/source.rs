//! The data source abstraction.

use crate::error::SourceResult;
use async_trait::async_trait;
use estatedesk_model::Record;

/// A provider of one record collection.
///
/// `fetch_all` returns the complete collection in the provider's order, or
/// fails. Partial results are never returned.
#[async_trait]
pub trait DataSource<T: Record>: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Fetches every record of the collection.
    async fn fetch_all(&self) -> SourceResult<Vec<T>>;
}

/// Validates a fetched batch; the first invalid record fails the batch.
pub fn validate_all<T: Record>(records: &[T]) -> SourceResult<()> {
    records.iter().try_for_each(Record::validate)?;
    Ok(())
}
