//! Core type definitions for EstateDesk.
//!
//! This crate defines the fundamental, domain-agnostic types shared by the
//! record model, the data sources and the stores:
//! - Record identifiers (opaque strings, UUID v7 when generated locally)
//! - UTC timestamps with lenient parsing of date-only values
//!
//! Domain records (properties, leases, documents, ...) live in
//! `estatedesk-model`, not here.

mod ids;
mod timestamp;

pub use ids::RecordId;
pub use timestamp::Timestamp;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid record id: {0:?}")]
    InvalidId(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}
