use crate::record::Check;
use crate::{Document, Record, RecordKind, ValidationError};
use estatedesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A rental agreement between a tenant and a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub id: RecordId,
    pub property_id: RecordId,
    pub tenant_id: RecordId,
    pub start_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    pub rent_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<f64>,
    pub status: LeaseStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents: Vec<Document>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    Active,
    Terminated,
    Expired,
    Pending,
}

impl Record for Lease {
    const KIND: RecordKind = RecordKind::Lease;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new(Self::KIND, &self.id)?;
        if self.property_id.is_blank() {
            return Err(check.fail("propertyId is blank"));
        }
        if self.tenant_id.is_blank() {
            return Err(check.fail("tenantId is blank"));
        }
        check.non_negative("rentAmount", self.rent_amount)?;
        if let Some(deposit) = self.deposit_amount {
            check.non_negative("depositAmount", deposit)?;
        }
        check.date_order(self.start_date, self.end_date)?;
        self.documents.iter().try_for_each(Record::validate)
    }
}
