use estatedesk_model::{Document, DocumentType};
use estatedesk_source::mock::ScriptedSource;
use estatedesk_source::{DataSource, FixtureSource, SourceError};
use estatedesk_types::{RecordId, Timestamp};
use std::time::Duration;

fn doc(id: &str) -> Document {
    Document {
        id: RecordId::new(id),
        name: format!("{id}.pdf"),
        url: format!("https://files.example.com/{id}.pdf"),
        document_type: DocumentType::Contract,
        uploaded_by: "agent-2".to_string(),
        uploaded_at: Timestamp::now(),
    }
}

// ── FixtureSource ────────────────────────────────────────────────

#[tokio::test]
async fn fixture_returns_records_in_order() {
    let source = FixtureSource::new(vec![doc("d1"), doc("d2")]);
    let records = source.fetch_all().await.unwrap();
    let ids: Vec<_> = records.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["d1", "d2"]);
    assert_eq!(source.name(), "fixture:documents");
}

#[tokio::test]
async fn failing_fixture_reports_message_verbatim() {
    let source = FixtureSource::<Document>::failing("network error");
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Unavailable(_)));
    assert_eq!(err.to_string(), "network error");
}

#[tokio::test]
async fn fixture_validates_records() {
    let mut bad = doc("d3");
    bad.url = " ".to_string();
    let source = FixtureSource::new(vec![doc("d1"), bad]);
    let err = source.fetch_all().await.unwrap_err();
    assert!(matches!(err, SourceError::Invalid(ref v) if v.id.as_str() == "d3"));
}

#[tokio::test(start_paused = true)]
async fn fixture_latency_is_simulated() {
    let source = FixtureSource::new(vec![doc("d1")]).with_latency(Duration::from_millis(600));
    let started = tokio::time::Instant::now();
    source.fetch_all().await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(600));
}

// ── Retry classification ─────────────────────────────────────────

#[test]
fn retryable_errors() {
    assert!(SourceError::Network("reset".into()).is_retryable());
    assert!(SourceError::Timeout.is_retryable());
    assert!(
        SourceError::Status {
            status: 503,
            url: "u".into()
        }
        .is_retryable()
    );
    assert!(
        !SourceError::Status {
            status: 404,
            url: "u".into()
        }
        .is_retryable()
    );
    assert!(!SourceError::Unavailable("down".into()).is_retryable());
}

// ── ScriptedSource ───────────────────────────────────────────────

#[tokio::test]
async fn scripted_replays_in_order_then_exhausts() {
    let source = ScriptedSource::new();
    source.push_ok(vec![doc("d1")]);
    source.push_err(SourceError::Timeout);

    assert_eq!(source.fetch_all().await.unwrap().len(), 1);
    assert!(matches!(source.fetch_all().await, Err(SourceError::Timeout)));
    assert_eq!(
        source.fetch_all().await.unwrap_err().to_string(),
        "script exhausted"
    );
    assert_eq!(source.calls(), 3);
}

#[tokio::test]
async fn scripted_gate_holds_fetch() {
    let source = std::sync::Arc::new(ScriptedSource::new());
    let gate = source.push_gated(Ok(vec![doc("d1")]));

    let task = tokio::spawn({
        let source = source.clone();
        async move { source.fetch_all().await }
    });
    tokio::task::yield_now().await;
    assert!(!task.is_finished());

    gate.notify_one();
    let records = task.await.unwrap().unwrap();
    assert_eq!(records.len(), 1);
}
