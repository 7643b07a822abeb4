use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The collections held by the dashboard, one store each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Document,
    Transaction,
    Lease,
    Property,
    Campaign,
    Customer,
}

impl RecordKind {
    /// Every kind, in display order.
    pub const ALL: [RecordKind; 6] = [
        Self::Property,
        Self::Lease,
        Self::Transaction,
        Self::Document,
        Self::Campaign,
        Self::Customer,
    ];

    /// Collection name, as used in API paths and fixture files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "documents",
            Self::Transaction => "transactions",
            Self::Lease => "leases",
            Self::Property => "properties",
            Self::Campaign => "campaigns",
            Self::Customer => "customers",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A collection name that matches no [`RecordKind`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown record kind: {0:?}")]
pub struct UnknownKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownKind;

    /// Accepts the collection name or its singular form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| {
                let plural = k.as_str();
                lower == plural || Some(lower.as_str()) == singular(plural)
            })
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

fn singular(plural: &str) -> Option<&str> {
    match plural {
        "properties" => Some("property"),
        other => other.strip_suffix('s'),
    }
}
