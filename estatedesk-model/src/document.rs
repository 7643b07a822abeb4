use crate::record::Check;
use crate::{Record, RecordKind, ValidationError};
use estatedesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A file attached to a property, lease or deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub uploaded_by: String,
    pub uploaded_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Contract,
    Deed,
    FloorPlan,
    Image,
    Other,
}

impl Record for Document {
    const KIND: RecordKind = RecordKind::Document;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new(Self::KIND, &self.id)?;
        check.text("name", &self.name)?;
        check.text("url", &self.url)
    }
}
