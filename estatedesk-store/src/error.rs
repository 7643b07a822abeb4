//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// The one way a store operation can fail.
///
/// Never returned from [`Store::refresh`](crate::Store::refresh) as an
/// `Err`: the message lands in [`StoreState::error`](crate::StoreState::error).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The data source could not deliver the collection.
    #[error("{0}")]
    LoadFailure(String),
}
