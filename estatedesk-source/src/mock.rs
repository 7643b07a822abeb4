//! A scripted source for testing stores.
//!
//! Responses are queued up front and handed out one per fetch. A gated
//! response holds its fetch in flight until the test releases the gate,
//! which makes loading states and overlapping refreshes observable.

use crate::error::{SourceError, SourceResult};
use crate::source::DataSource;
use async_trait::async_trait;
use estatedesk_model::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

struct Step<T> {
    response: SourceResult<Vec<T>>,
    gate: Option<Arc<Notify>>,
}

/// Replays queued responses in order.
pub struct ScriptedSource<T> {
    steps: Mutex<VecDeque<Step<T>>>,
    calls: AtomicUsize,
}

impl<T: Record> ScriptedSource<T> {
    /// Creates a source with an empty script.
    pub fn new() -> Self {
        Self {
            steps: Mutex::new(VecDeque::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Queues a successful response.
    pub fn push_ok(&self, records: Vec<T>) {
        self.push(Ok(records), None);
    }

    /// Queues a failure.
    pub fn push_err(&self, err: SourceError) {
        self.push(Err(err), None);
    }

    /// Queues a response that is only returned once the gate is notified.
    pub fn push_gated(&self, response: SourceResult<Vec<T>>) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.push(response, Some(gate.clone()));
        gate
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, response: SourceResult<Vec<T>>, gate: Option<Arc<Notify>>) {
        self.steps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(Step { response, gate });
    }
}

impl<T: Record> Default for ScriptedSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> DataSource<T> for ScriptedSource<T> {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn fetch_all(&self) -> SourceResult<Vec<T>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let step = self
            .steps
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        let Some(step) = step else {
            return Err(SourceError::Unavailable("script exhausted".to_string()));
        };
        if let Some(gate) = step.gate {
            gate.notified().await;
        }
        step.response
    }
}
