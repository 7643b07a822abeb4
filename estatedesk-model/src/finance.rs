use crate::record::Check;
use crate::{Record, RecordKind, ValidationError};
use estatedesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A money movement tied to a property or a lease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTransaction {
    pub id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lease_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Signed; refunds and adjustments are negative.
    pub amount: f64,
    pub date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Rent,
    Deposit,
    Maintenance,
    Commission,
    Other,
}

impl Record for FinancialTransaction {
    const KIND: RecordKind = RecordKind::Transaction;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new(Self::KIND, &self.id)?;
        check.finite("amount", self.amount)
    }
}
