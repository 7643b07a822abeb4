use estatedesk_model::{
    CampaignStatus, Customer, Document, DocumentType, FinancialTransaction, Lease, LeaseStatus,
    MarketingCampaign, Property, PropertyStatus, PropertyType, Record, RecordKind,
    TransactionType,
};
use estatedesk_types::RecordId;
use pretty_assertions::assert_eq;
use serde_json::json;

fn property_json() -> serde_json::Value {
    json!({
        "id": "1",
        "title": "Modern Family Home",
        "description": "A beautiful 4-bedroom family home with a large garden.",
        "type": "residential",
        "status": "available",
        "address": {
            "street": "101 Maple Ave",
            "city": "Springfield",
            "state": "IL",
            "zipCode": "62704",
            "country": "USA"
        },
        "price": 350000,
        "area": 2500,
        "bedrooms": 4,
        "bathrooms": 3,
        "images": [],
        "ownerId": "1",
        "agentId": "2",
        "listedDate": "2025-04-01",
        "createdAt": "2025-04-01",
        "updatedAt": "2025-04-01"
    })
}

fn lease_json() -> serde_json::Value {
    json!({
        "id": "1",
        "propertyId": "1",
        "tenantId": "3",
        "startDate": "2025-05-01",
        "rentAmount": 2200,
        "depositAmount": 4400,
        "status": "pending",
        "createdAt": "2025-04-15",
        "updatedAt": "2025-04-15"
    })
}

fn document(id: &str) -> Document {
    serde_json::from_value(json!({
        "id": id,
        "name": "Lease agreement",
        "url": "https://files.example.com/lease-1.pdf",
        "type": "contract",
        "uploadedBy": "2",
        "uploadedAt": "2025-04-15T09:00:00Z"
    }))
    .unwrap()
}

// ── Decoding ─────────────────────────────────────────────────────

#[test]
fn property_decodes_camel_case_payload() {
    let p: Property = serde_json::from_value(property_json()).unwrap();
    assert_eq!(p.id, RecordId::new("1"));
    assert_eq!(p.property_type, PropertyType::Residential);
    assert_eq!(p.status, PropertyStatus::Available);
    assert_eq!(p.address.zip_code, "62704");
    assert_eq!(p.bedrooms, Some(4));
    assert_eq!(p.sold_date, None);
    assert!(p.documents.is_empty());
    assert!(p.validate().is_ok());
}

#[test]
fn property_reencodes_with_wire_names() {
    let p: Property = serde_json::from_value(property_json()).unwrap();
    let v = serde_json::to_value(&p).unwrap();
    assert_eq!(v["type"], "residential");
    assert_eq!(v["address"]["zipCode"], "62704");
    assert_eq!(v["listedDate"], "2025-04-01T00:00:00.000Z");
    assert!(v.get("soldDate").is_none());
}

#[test]
fn lease_decodes_optional_fields() {
    let l: Lease = serde_json::from_value(lease_json()).unwrap();
    assert_eq!(l.status, LeaseStatus::Pending);
    assert_eq!(l.end_date, None);
    assert_eq!(l.deposit_amount, Some(4400.0));
    assert!(l.validate().is_ok());
}

#[test]
fn document_type_snake_case() {
    let mut v = serde_json::to_value(document("d1")).unwrap();
    v["type"] = json!("floor_plan");
    let d: Document = serde_json::from_value(v).unwrap();
    assert_eq!(d.document_type, DocumentType::FloorPlan);
}

#[test]
fn unknown_enum_value_is_a_decode_error() {
    let mut v = lease_json();
    v["status"] = json!("frozen");
    assert!(serde_json::from_value::<Lease>(v).is_err());
}

#[test]
fn kinds_are_wired() {
    assert_eq!(Document::KIND, RecordKind::Document);
    assert_eq!(FinancialTransaction::KIND, RecordKind::Transaction);
    assert_eq!(Lease::KIND, RecordKind::Lease);
    assert_eq!(Property::KIND, RecordKind::Property);
    assert_eq!(MarketingCampaign::KIND, RecordKind::Campaign);
    assert_eq!(Customer::KIND, RecordKind::Customer);
}

// ── Validation ───────────────────────────────────────────────────

#[test]
fn blank_id_is_rejected() {
    let mut v = property_json();
    v["id"] = json!("  ");
    let p: Property = serde_json::from_value(v).unwrap();
    let err = p.validate().unwrap_err();
    assert_eq!(err.kind, RecordKind::Property);
    assert_eq!(err.reason, "id is blank");
}

#[test]
fn negative_price_is_rejected() {
    let mut v = property_json();
    v["price"] = json!(-1);
    let p: Property = serde_json::from_value(v).unwrap();
    assert_eq!(p.validate().unwrap_err().reason, "price is negative");
}

#[test]
fn sold_before_listed_is_rejected() {
    let mut v = property_json();
    v["soldDate"] = json!("2025-01-01");
    let p: Property = serde_json::from_value(v).unwrap();
    assert_eq!(
        p.validate().unwrap_err().reason,
        "end date is before start date"
    );
}

#[test]
fn nested_document_errors_surface() {
    let mut l: Lease = serde_json::from_value(lease_json()).unwrap();
    let mut doc = document("d1");
    doc.url = String::new();
    l.documents.push(doc);
    let err = l.validate().unwrap_err();
    assert_eq!(err.kind, RecordKind::Document);
    assert_eq!(err.id, RecordId::new("d1"));
}

#[test]
fn lease_requires_property_and_tenant() {
    let mut v = lease_json();
    v["tenantId"] = json!("");
    let l: Lease = serde_json::from_value(v).unwrap();
    assert_eq!(l.validate().unwrap_err().reason, "tenantId is blank");
}

#[test]
fn refund_transactions_may_be_negative() {
    let t: FinancialTransaction = serde_json::from_value(json!({
        "id": "t9",
        "leaseId": "1",
        "type": "deposit",
        "amount": -4400,
        "date": "2025-06-01",
        "createdBy": "2",
        "createdAt": "2025-06-01"
    }))
    .unwrap();
    assert_eq!(t.transaction_type, TransactionType::Deposit);
    assert!(t.validate().is_ok());
}

#[test]
fn campaign_budget_and_dates() {
    let c: MarketingCampaign = serde_json::from_value(json!({
        "id": "c1",
        "name": "Spring open houses",
        "type": "social_media",
        "startDate": "2025-04-01",
        "endDate": "2025-03-01",
        "properties": ["1", "2"],
        "budget": 5000,
        "status": "planned",
        "createdAt": "2025-03-20",
        "updatedAt": "2025-03-20"
    }))
    .unwrap();
    assert_eq!(c.status, CampaignStatus::Planned);
    assert_eq!(c.properties.len(), 2);
    assert!(c.validate().is_err());
}

#[test]
fn customer_email_and_primary_contact() {
    let mut c: Customer = serde_json::from_value(json!({
        "id": "cu1",
        "name": "Acme Holdings",
        "email": "ops@acme.test",
        "status": "prospect",
        "contacts": [
            {"id": "k1", "firstName": "Ana", "lastName": "Ruiz", "email": "ana@acme.test", "isPrimary": true},
            {"id": "k2", "firstName": "Li", "lastName": "Wei", "email": "li@acme.test"}
        ],
        "createdAt": "2025-02-01",
        "updatedAt": "2025-02-01"
    }))
    .unwrap();
    assert!(c.validate().is_ok());
    assert_eq!(c.primary_contact().map(|k| k.first_name.as_str()), Some("Ana"));

    c.contacts[1].is_primary = true;
    assert_eq!(
        c.validate().unwrap_err().reason,
        "more than one primary contact"
    );

    c.contacts[1].is_primary = false;
    c.email = "not-an-email".to_string();
    assert_eq!(c.validate().unwrap_err().reason, "email has no '@'");
}

#[test]
fn validation_error_display() {
    let d = Document {
        name: String::new(),
        ..document("d7")
    };
    assert_eq!(
        d.validate().unwrap_err().to_string(),
        "invalid documents record 'd7': name is empty"
    );
}
