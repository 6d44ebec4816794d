//! Zoned date-time fields in stored documents
//!
//! Zoned values only round-trip meaningfully for instants inside the zone's
//! real history; the cases here use the present day and the near-maximum ISO
//! instant, never ancient dates whose zones did not yet exist.

use serde::{Deserialize, Serialize};
use tempora::{parse_offset_date_time, Duration, Instant, ZonedDateTime};

use crate::common::{self, DocumentStore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Foo {
    id: String,
    zoned_date_time: ZonedDateTime,
}

fn roundtrip_zoned_date_time_in_document(zdt: ZonedDateTime) {
    common::init_tracing();
    let mut store = DocumentStore::new();
    store.store(
        "foos/1",
        &Foo {
            id: "foos/1".to_string(),
            zoned_date_time: zdt,
        },
    );

    // Strict equality back out: same instant AND same zone identifier.
    let loaded: Foo = store.load("foos/1");
    assert_eq!(loaded.zoned_date_time, zdt);
    assert_eq!(loaded.zoned_date_time.to_instant(), zdt.to_instant());
    assert_eq!(loaded.zoned_date_time.zone_id(), zdt.zone_id());

    // The stored field is the two-field structured record. The offset text,
    // re-parsed as an absolute offset date-time, pins the original instant.
    let raw = &store.raw("foos/1")["zoned_date_time"];
    assert_eq!(raw["Zone"], serde_json::json!(zdt.zone_id()));
    let offset_text = raw["OffsetDateTime"].as_str().unwrap();
    assert_eq!(offset_text, zdt.offset_date_time());
    assert_eq!(parse_offset_date_time(offset_text).unwrap(), zdt.to_instant());
}

#[test]
fn zoned_date_time_in_document_now() {
    let zdt = ZonedDateTime::from_zone_id(Instant::now(), "America/New_York").unwrap();
    roundtrip_zoned_date_time_in_document(zdt);
}

#[test]
fn zoned_date_time_in_document_near_iso_max() {
    let instant = Instant::MAX_ISO
        .checked_sub(Duration::from_hours(24))
        .unwrap();
    let zdt = ZonedDateTime::from_zone_id(instant, "America/New_York").unwrap();
    roundtrip_zoned_date_time_in_document(zdt);
}

#[test]
fn zoned_date_time_in_document_half_hour_zone() {
    let zdt = ZonedDateTime::from_zone_id(Instant::now(), "Asia/Kolkata").unwrap();
    roundtrip_zoned_date_time_in_document(zdt);
}

#[test]
fn same_instant_different_zones_stay_distinct() {
    let instant = Instant::now();
    let mut store = DocumentStore::new();
    store.store(
        "foos/1",
        &Foo {
            id: "foos/1".to_string(),
            zoned_date_time: ZonedDateTime::from_zone_id(instant, "Europe/London").unwrap(),
        },
    );
    store.store(
        "foos/2",
        &Foo {
            id: "foos/2".to_string(),
            zoned_date_time: ZonedDateTime::from_zone_id(instant, "Europe/Paris").unwrap(),
        },
    );

    let london: Foo = store.load("foos/1");
    let paris: Foo = store.load("foos/2");
    assert_ne!(london.zoned_date_time, paris.zoned_date_time);
    assert_eq!(
        london
            .zoned_date_time
            .compare_by_instant(paris.zoned_date_time),
        std::cmp::Ordering::Equal
    );
}
