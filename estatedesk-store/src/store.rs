//! The generic record store.

use crate::config::{DuplicatePolicy, RacePolicy, StoreConfig};
use crate::error::StoreError;
use crate::state::{StoreState, StoreSummary};
use estatedesk_model::Record;
use estatedesk_source::DataSource;
use estatedesk_types::{RecordId, Timestamp};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

/// How a single refresh settled.
///
/// Informational only; the published [`StoreState`] is the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The fetched collection replaced the old one.
    Applied { count: usize },
    /// The fetch failed; the message is now in `StoreState::error`.
    Failed(StoreError),
    /// A newer refresh was started first; this result was dropped.
    Superseded { token: u64 },
}

impl RefreshOutcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

struct Inner<T: Record> {
    name: String,
    source: Arc<dyn DataSource<T>>,
    config: StoreConfig,
    state: watch::Sender<StoreState<T>>,
}

/// One observable record collection.
///
/// Cloning a `Store` yields another handle to the same collection.
pub struct Store<T: Record> {
    inner: Arc<Inner<T>>,
}

impl<T: Record> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Record> std::fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.borrow();
        f.debug_struct("Store")
            .field("name", &self.inner.name)
            .field("source", &self.inner.source.name())
            .field("entities", &state.entities.len())
            .field("is_loading", &state.is_loading)
            .field("error", &state.error)
            .finish_non_exhaustive()
    }
}

impl<T: Record> Store<T> {
    /// Creates an empty store with the default configuration.
    pub fn new(name: impl Into<String>, source: Arc<dyn DataSource<T>>) -> Self {
        Self::with_config(name, source, StoreConfig::default())
    }

    /// Creates an empty store with a custom configuration.
    pub fn with_config(
        name: impl Into<String>,
        source: Arc<dyn DataSource<T>>,
        config: StoreConfig,
    ) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                source,
                config,
                state,
            }),
        }
    }

    /// Returns the store's name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns the store's configuration.
    pub fn config(&self) -> StoreConfig {
        self.inner.config
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> StoreState<T> {
        self.inner.state.borrow().clone()
    }

    /// Subscribes to state changes.
    ///
    /// The receiver starts out with the current state marked as seen; every
    /// later change bumps [`StoreState::revision`] by one.
    pub fn subscribe(&self) -> watch::Receiver<StoreState<T>> {
        self.inner.state.subscribe()
    }

    /// Returns the record with `id`, if present (first match).
    pub fn get(&self, id: &RecordId) -> Option<T> {
        self.inner
            .state
            .borrow()
            .entities
            .iter()
            .find(|e| e.id() == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.state.borrow().entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.state.borrow().entities.is_empty()
    }

    /// Summarises the current state without cloning records.
    pub fn summary(&self) -> StoreSummary {
        let state = self.inner.state.borrow();
        StoreSummary {
            kind: T::KIND,
            count: state.entities.len(),
            status: state.status(),
            error: state.error.clone(),
            loaded_at: state.loaded_at,
            revision: state.revision,
        }
    }

    /// Appends one record at the end of the collection.
    ///
    /// Publishes exactly one change, unless the duplicate policy drops the
    /// record, in which case nothing is published.
    pub fn append(&self, entity: T) {
        let name = &self.inner.name;
        let policy = self.inner.config.duplicate_policy;
        self.inner.state.send_if_modified(|state| {
            if policy == DuplicatePolicy::KeepFirst
                && state.entities.iter().any(|e| e.id() == entity.id())
            {
                debug!("[{}] append of {} ignored: id already present", name, entity.id());
                return false;
            }
            state.entities.push(entity);
            state.revision += 1;
            true
        });
    }

    /// Reloads the collection from the data source.
    ///
    /// Publishes the loading state before the fetch starts and the settled
    /// state after it ends. A failed fetch keeps the previous records and
    /// sets [`StoreState::error`]; it is never returned as an error.
    ///
    /// Dropping the returned future before it completes withdraws the
    /// request: its loading contribution is released and it no longer
    /// counts as the newest request.
    pub async fn refresh(&self) -> RefreshOutcome {
        let name = &self.inner.name;

        let mut token = 0;
        self.inner.state.send_modify(|state| {
            state.issued += 1;
            token = state.issued;
            state.pending.insert(token);
            state.is_loading = true;
            state.revision += 1;
        });
        let mut guard = PendingRefresh {
            inner: &self.inner,
            token,
            armed: true,
        };
        debug!(
            "[{}] refresh #{} started from {}",
            name,
            token,
            self.inner.source.name()
        );

        let result = self.inner.source.fetch_all().await;
        guard.armed = false;

        let race_policy = self.inner.config.race_policy;
        let mut outcome = RefreshOutcome::Superseded { token };
        self.inner.state.send_if_modified(|state| {
            let loading_changed = state.finish(token);

            if race_policy == RacePolicy::LatestRequestWins && state.has_newer_than(token) {
                if !loading_changed {
                    return false;
                }
                state.revision += 1;
                return true;
            }

            outcome = match result {
                Ok(records) => {
                    let count = records.len();
                    state.entities = records;
                    state.error = None;
                    state.loaded_at = Some(Timestamp::now());
                    RefreshOutcome::Applied { count }
                }
                Err(e) => {
                    let message = e.to_string();
                    state.error = Some(message.clone());
                    RefreshOutcome::Failed(StoreError::LoadFailure(message))
                }
            };
            state.settled = state.settled.max(token);
            state.revision += 1;
            true
        });

        match &outcome {
            RefreshOutcome::Applied { count } => {
                debug!("[{}] refresh #{} applied {} records", name, token, count);
            }
            RefreshOutcome::Failed(e) => {
                warn!("[{}] refresh #{} failed: {}", name, token, e);
            }
            RefreshOutcome::Superseded { .. } => {
                debug!("[{}] refresh #{} superseded, result dropped", name, token);
            }
        }
        outcome
    }
}

/// Releases a refresh whose future was dropped before the fetch returned.
struct PendingRefresh<'a, T: Record> {
    inner: &'a Inner<T>,
    token: u64,
    armed: bool,
}

impl<T: Record> Drop for PendingRefresh<'_, T> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let token = self.token;
        self.inner.state.send_if_modified(|state| {
            if !state.finish(token) {
                return false;
            }
            state.revision += 1;
            true
        });
        debug!("[{}] refresh #{} cancelled", self.inner.name, token);
    }
}
