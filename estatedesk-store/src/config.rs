use serde::{Deserialize, Serialize};

/// Behaviour switches for a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub race_policy: RacePolicy,
    pub duplicate_policy: DuplicatePolicy,
}

/// What happens when refreshes overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RacePolicy {
    /// Every completion is applied in the order it settles.
    #[default]
    LastWriteWins,
    /// A completion is discarded when a newer refresh has been started.
    LatestRequestWins,
}

/// What `append` does with a record whose id is already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Append anyway.
    #[default]
    Allow,
    /// Drop the new record silently.
    KeepFirst,
}
