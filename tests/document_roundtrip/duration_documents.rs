//! Duration fields in stored documents

use serde::{Deserialize, Serialize};
use tempora::Duration;

use crate::common::{self, DocumentStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Foo {
    id: String,
    duration: Duration,
}

fn roundtrip_duration_in_document(duration: Duration) {
    common::init_tracing();
    let mut store = DocumentStore::new();
    store.store(
        "foos/1",
        &Foo {
            id: "foos/1".to_string(),
            duration,
        },
    );

    let loaded: Foo = store.load("foos/1");
    assert_eq!(loaded.duration, duration);

    // The stored field is the canonical text, byte for byte.
    let raw = store.raw("foos/1");
    assert_eq!(raw["duration"], serde_json::json!(duration.to_string()));
}

#[test]
fn duration_in_document_positive() {
    roundtrip_duration_in_document(Duration::from_hours(2));
}

#[test]
fn duration_in_document_negative() {
    roundtrip_duration_in_document(Duration::from_hours(-5));
}

#[test]
fn duration_in_document_min() {
    roundtrip_duration_in_document(Duration::MIN);
}

#[test]
fn duration_in_document_max() {
    roundtrip_duration_in_document(Duration::MAX);
}

#[test]
fn duration_in_document_subsecond() {
    roundtrip_duration_in_document(Duration::from_millis(1_500) + Duration::from_ticks(3));
}

#[test]
fn duration_sentinel_field_text() {
    let mut store = DocumentStore::new();
    store.store(
        "foos/1",
        &Foo {
            id: "foos/1".to_string(),
            duration: Duration::MIN,
        },
    );
    assert_eq!(
        store.raw("foos/1")["duration"],
        serde_json::json!("-10675199.02:48:05.4775808")
    );
}
