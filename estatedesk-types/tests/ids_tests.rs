use estatedesk_types::{Error, RecordId};
use std::collections::HashSet;
use std::str::FromStr;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn generated_ids_are_unique() {
    let a = RecordId::generate();
    let b = RecordId::generate();
    assert_ne!(a, b);
}

#[test]
fn generated_ids_are_uuid_text() {
    let id = RecordId::generate();
    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}

#[test]
fn new_keeps_text_verbatim() {
    let id = RecordId::new("doc1");
    assert_eq!(id.as_str(), "doc1");
    assert_eq!(id.to_string(), "doc1");
}

#[test]
fn from_conversions_agree() {
    assert_eq!(RecordId::from("t1"), RecordId::from("t1".to_string()));
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_accepts_opaque_ids() {
    assert_eq!(RecordId::parse("42").unwrap().as_str(), "42");
    assert_eq!(RecordId::from_str("lease-9").unwrap().as_str(), "lease-9");
}

#[test]
fn parse_rejects_blank() {
    assert_eq!(RecordId::parse(""), Err(Error::InvalidId(String::new())));
    assert!(RecordId::from_str("   ").is_err());
}

#[test]
fn is_blank_detects_whitespace() {
    assert!(RecordId::new(" ").is_blank());
    assert!(!RecordId::new("x").is_blank());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let id = RecordId::new("p-1");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"p-1\"");
    let back: RecordId = serde_json::from_str("\"p-1\"").unwrap();
    assert_eq!(back, id);
}

#[test]
fn hash_and_eq() {
    let mut set = HashSet::new();
    set.insert(RecordId::new("a"));
    set.insert(RecordId::new("a"));
    set.insert(RecordId::new("b"));
    assert_eq!(set.len(), 2);
}
