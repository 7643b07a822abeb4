use crate::RecordKind;
use estatedesk_types::{RecordId, Timestamp};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record held by a store.
///
/// Every entity kind implements this with a fixed schema. The only
/// behaviour a store relies on is [`Record::id`]; validation is applied by
/// data sources before records reach a store.
pub trait Record: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// The collection this record type belongs to.
    const KIND: RecordKind;

    /// The record's identifier.
    fn id(&self) -> &RecordId;

    /// Checks the record against its schema rules.
    /// Return `Err` to reject the whole load it arrived in.
    fn validate(&self) -> Result<(), ValidationError> {
        Check::new(Self::KIND, self.id()).map(|_| ())
    }
}

/// A record that broke a schema rule.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} record '{id}': {reason}")]
pub struct ValidationError {
    pub kind: RecordKind,
    pub id: RecordId,
    pub reason: String,
}

/// Rule helpers shared by the per-kind `validate` implementations.
pub(crate) struct Check<'a> {
    kind: RecordKind,
    id: &'a RecordId,
}

impl<'a> Check<'a> {
    /// Starts checking a record; fails right away on a blank id.
    pub(crate) fn new(kind: RecordKind, id: &'a RecordId) -> Result<Self, ValidationError> {
        let check = Self { kind, id };
        if id.is_blank() {
            return Err(check.fail("id is blank"));
        }
        Ok(check)
    }

    pub(crate) fn fail(&self, reason: impl Into<String>) -> ValidationError {
        ValidationError {
            kind: self.kind,
            id: self.id.clone(),
            reason: reason.into(),
        }
    }

    pub(crate) fn text(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(self.fail(format!("{field} is empty")));
        }
        Ok(())
    }

    /// A finite amount that may be negative (refunds, adjustments).
    pub(crate) fn finite(&self, field: &str, value: f64) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(self.fail(format!("{field} is not a finite number")));
        }
        Ok(())
    }

    pub(crate) fn non_negative(&self, field: &str, value: f64) -> Result<(), ValidationError> {
        self.finite(field, value)?;
        if value < 0.0 {
            return Err(self.fail(format!("{field} is negative")));
        }
        Ok(())
    }

    pub(crate) fn date_order(
        &self,
        start: Timestamp,
        end: Option<Timestamp>,
    ) -> Result<(), ValidationError> {
        match end {
            Some(end) if end < start => Err(self.fail("end date is before start date")),
            _ => Ok(()),
        }
    }
}
