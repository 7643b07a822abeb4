use crate::record::Check;
use crate::{Record, RecordKind, ValidationError};
use estatedesk_types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A marketing push covering one or more properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingCampaign {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub start_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    /// Ids of the promoted properties.
    #[serde(default)]
    pub properties: Vec<RecordId>,
    pub budget: f64,
    pub status: CampaignStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignType {
    Email,
    Sms,
    SocialMedia,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

impl Record for MarketingCampaign {
    const KIND: RecordKind = RecordKind::Campaign;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let check = Check::new(Self::KIND, &self.id)?;
        check.text("name", &self.name)?;
        check.non_negative("budget", self.budget)?;
        check.date_order(self.start_date, self.end_date)
    }
}
