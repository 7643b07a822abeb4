//! Published store state.

use estatedesk_model::RecordKind;
use estatedesk_types::Timestamp;
use serde::Serialize;
use std::collections::BTreeSet;

/// A snapshot of one store.
///
/// `is_loading` and `error` are independent: a store that failed and is
/// loading again reports both until the new attempt settles.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreState<T> {
    /// Records in insertion (or source) order.
    pub entities: Vec<T>,
    /// True while at least one refresh is in flight.
    pub is_loading: bool,
    /// Message of the last failed refresh, cleared by the next success.
    pub error: Option<String>,
    /// Incremented once per published change.
    pub revision: u64,
    /// When the collection was last replaced by a successful refresh.
    pub loaded_at: Option<Timestamp>,
    /// Tokens of refreshes started and not yet settled or dropped.
    pub(crate) pending: BTreeSet<u64>,
    /// Last token handed out.
    pub(crate) issued: u64,
    /// Newest token whose result was applied or recorded as an error.
    pub(crate) settled: u64,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            entities: Vec::new(),
            is_loading: false,
            error: None,
            revision: 0,
            loaded_at: None,
            pending: BTreeSet::new(),
            issued: 0,
            settled: 0,
        }
    }
}

impl<T> StoreState<T> {
    /// Coarse status for views that render one of three states.
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        if self.is_loading {
            LoadStatus::Loading
        } else if self.error.is_some() {
            LoadStatus::Errored
        } else {
            LoadStatus::Idle
        }
    }

    /// Number of refreshes started and not yet settled.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Whether a refresh newer than `token` has settled or is still running.
    pub(crate) fn has_newer_than(&self, token: u64) -> bool {
        self.settled > token || self.pending.last().is_some_and(|&newest| newest > token)
    }

    /// Drops `token` from the pending set and recomputes `is_loading`.
    /// Returns whether `is_loading` changed.
    pub(crate) fn finish(&mut self, token: u64) -> bool {
        self.pending.remove(&token);
        let was_loading = self.is_loading;
        self.is_loading = !self.pending.is_empty();
        was_loading != self.is_loading
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Idle,
    Loading,
    Errored,
}

/// Entity-free summary of a store, for logs and status output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSummary {
    pub kind: RecordKind,
    pub count: usize,
    pub status: LoadStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loaded_at: Option<Timestamp>,
    pub revision: u64,
}
