use estatedesk_model::{RecordKind, UnknownKind};
use std::str::FromStr;

#[test]
fn collection_names() {
    assert_eq!(RecordKind::Document.as_str(), "documents");
    assert_eq!(RecordKind::Transaction.as_str(), "transactions");
    assert_eq!(RecordKind::Lease.as_str(), "leases");
    assert_eq!(RecordKind::Property.as_str(), "properties");
    assert_eq!(RecordKind::Campaign.as_str(), "campaigns");
    assert_eq!(RecordKind::Customer.as_str(), "customers");
}

#[test]
fn all_lists_every_kind_once() {
    let mut kinds = RecordKind::ALL.to_vec();
    kinds.sort();
    kinds.dedup();
    assert_eq!(kinds.len(), 6);
}

#[test]
fn parses_plural_and_singular() {
    for kind in RecordKind::ALL {
        assert_eq!(RecordKind::from_str(kind.as_str()).unwrap(), kind);
    }
    assert_eq!(RecordKind::from_str("property").unwrap(), RecordKind::Property);
    assert_eq!(RecordKind::from_str("Lease").unwrap(), RecordKind::Lease);
    assert_eq!(RecordKind::from_str(" customers ").unwrap(), RecordKind::Customer);
}

#[test]
fn rejects_unknown() {
    assert_eq!(
        RecordKind::from_str("widgets"),
        Err(UnknownKind("widgets".to_string()))
    );
}

#[test]
fn display_matches_collection_name() {
    assert_eq!(RecordKind::Campaign.to_string(), "campaigns");
}

#[test]
fn serde_uses_snake_case_variant() {
    let json = serde_json::to_string(&RecordKind::Transaction).unwrap();
    assert_eq!(json, "\"transaction\"");
}
