//! Data sources for EstateDesk stores.
//!
//! A store never talks to the network or reads fixtures itself. It holds a
//! [`DataSource`] and asks it for the full collection on every refresh.
//!
//! ## Sources
//!
//! - **HTTP**: [`HttpSource`] reads `GET {base_url}/api/v1/{collection}`
//!   with a timeout and bounded retries
//! - **Fixture**: [`FixtureSource`] serves an in-memory collection, with
//!   optional simulated latency
//! - **Scripted**: [`mock::ScriptedSource`] replays queued responses, for tests
//!
//! Every source validates records before handing them over, so a store
//! only ever holds records that passed [`Record::validate`](estatedesk_model::Record::validate).

mod config;
mod error;
mod fixture;
mod http;
pub mod mock;
mod source;

pub use config::SourceConfig;
pub use error::{SourceError, SourceResult};
pub use fixture::FixtureSource;
pub use http::{HttpSource, http_client};
pub use source::{DataSource, validate_all};
