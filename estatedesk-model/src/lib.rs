//! Record model for EstateDesk.
//!
//! Defines the fixed record schema of every entity kind the dashboard
//! stores hold:
//! - [`Record`]: the contract every stored record satisfies (kind, id, validation)
//! - [`RecordKind`]: the closed set of collections and their wire names
//! - one plain struct per kind ([`Property`], [`Lease`], [`FinancialTransaction`],
//!   [`Document`], [`MarketingCampaign`], [`Customer`])
//!
//! Records are validated once, at the boundary where they arrive from a data
//! source. Stores never validate; a locally appended record is trusted.

mod campaign;
mod customer;
mod document;
mod finance;
mod kind;
mod lease;
mod property;
mod record;

pub use campaign::{CampaignStatus, CampaignType, MarketingCampaign};
pub use customer::{Contact, Customer, CustomerStatus, Note};
pub use document::{Document, DocumentType};
pub use finance::{FinancialTransaction, TransactionType};
pub use kind::{RecordKind, UnknownKind};
pub use lease::{Lease, LeaseStatus};
pub use property::{Address, Property, PropertyStatus, PropertyType};
pub use record::{Record, ValidationError};
