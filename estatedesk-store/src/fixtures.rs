//! Seed data for the dashboard.
//!
//! Used by the fixture HTTP server and by [`Stores::with_fixtures`](crate::Stores::with_fixtures)
//! when no API is configured.

use estatedesk_model::{
    Customer, Document, FinancialTransaction, Lease, MarketingCampaign, Property, RecordKind,
};
use serde::{Deserialize, Serialize};

const SEED: &str = include_str!("../fixtures/seed.json");

/// One collection per record kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureData {
    pub properties: Vec<Property>,
    pub leases: Vec<Lease>,
    pub transactions: Vec<FinancialTransaction>,
    pub documents: Vec<Document>,
    pub campaigns: Vec<MarketingCampaign>,
    pub customers: Vec<Customer>,
}

impl FixtureData {
    /// The built-in seed data.
    pub fn seed() -> serde_json::Result<Self> {
        serde_json::from_str(SEED)
    }

    /// Reads fixture data from a JSON document with the same layout as the seed.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// One collection as a JSON array.
    pub fn collection(&self, kind: RecordKind) -> serde_json::Result<serde_json::Value> {
        match kind {
            RecordKind::Document => serde_json::to_value(&self.documents),
            RecordKind::Transaction => serde_json::to_value(&self.transactions),
            RecordKind::Lease => serde_json::to_value(&self.leases),
            RecordKind::Property => serde_json::to_value(&self.properties),
            RecordKind::Campaign => serde_json::to_value(&self.campaigns),
            RecordKind::Customer => serde_json::to_value(&self.customers),
        }
    }

    /// Number of records in one collection.
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Document => self.documents.len(),
            RecordKind::Transaction => self.transactions.len(),
            RecordKind::Lease => self.leases.len(),
            RecordKind::Property => self.properties.len(),
            RecordKind::Campaign => self.campaigns.len(),
            RecordKind::Customer => self.customers.len(),
        }
    }
}
