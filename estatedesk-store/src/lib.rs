//! Observable record stores for EstateDesk.
//!
//! A [`Store`] owns one record collection together with its load status and
//! exposes exactly two ways to change it:
//!
//! - [`Store::refresh`] replaces the collection with whatever the store's
//!   [`DataSource`](estatedesk_source::DataSource) returns, or records the
//!   failure in [`StoreState::error`] and keeps the old collection
//! - [`Store::append`] pushes one record to the end
//!
//! Consumers read [`Store::snapshot`] or hold a [`Store::subscribe`]
//! receiver and react to each published [`StoreState`]. Nothing outside the
//! store can mutate its state.
//!
//! Stores are plain values: build them (usually through [`Stores`]) and pass
//! them to whatever needs them. There is no global instance.
//!
//! # Example
//!
//! ```
//! use estatedesk_model::{Document, DocumentType};
//! use estatedesk_source::FixtureSource;
//! use estatedesk_store::Store;
//! use estatedesk_types::{RecordId, Timestamp};
//! use std::sync::Arc;
//!
//! let store = Store::<Document>::new("documents", Arc::new(FixtureSource::<Document>::new(vec![])));
//! store.append(Document {
//!     id: RecordId::new("doc1"),
//!     name: "Deed".to_string(),
//!     url: "https://files.example.com/deed.pdf".to_string(),
//!     document_type: DocumentType::Deed,
//!     uploaded_by: "agent-1".to_string(),
//!     uploaded_at: Timestamp::now(),
//! });
//!
//! let state = store.snapshot();
//! assert_eq!(state.entities.len(), 1);
//! assert!(!state.is_loading);
//! ```

mod config;
mod error;
pub mod fixtures;
mod state;
mod store;
mod stores;

pub use config::{DuplicatePolicy, RacePolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use fixtures::FixtureData;
pub use state::{LoadStatus, StoreState, StoreSummary};
pub use store::{RefreshOutcome, Store};
pub use stores::{
    CampaignStore, CustomerStore, DocumentStore, LeaseStore, PropertyStore, RefreshReport,
    StoreSources, Stores, TransactionStore,
};
