#![allow(dead_code)]

use estatedesk_model::{Record, RecordKind};
use estatedesk_types::RecordId;
use serde::{Deserialize, Serialize};

/// Minimal record used to exercise the generic store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: RecordId,
    pub label: String,
}

impl Record for Item {
    const KIND: RecordKind = RecordKind::Document;

    fn id(&self) -> &RecordId {
        &self.id
    }
}

pub fn item(id: &str) -> Item {
    Item {
        id: RecordId::new(id),
        label: format!("item {id}"),
    }
}

pub fn ids(items: &[Item]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
