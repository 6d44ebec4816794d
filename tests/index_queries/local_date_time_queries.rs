//! Comparison queries over stored local date-time fields
//!
//! Canonical local date-time text is fixed-width with fields in descending
//! significance, so the stored string itself is the index key: no decode
//! happens anywhere on the query path.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tempora::{Duration, LocalDateTime};

use crate::common::{self, Cmp, DocumentStore, Order};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Foo {
    id: String,
    local_date_time: LocalDateTime,
}

fn store_three(values: [LocalDateTime; 3]) -> DocumentStore {
    common::init_tracing();
    let mut store = DocumentStore::new();
    for (i, ldt) in values.into_iter().enumerate() {
        let id = format!("foos/{}", i + 1);
        store.store(
            &id,
            &Foo {
                id: id.clone(),
                local_date_time: ldt,
            },
        );
    }
    store
}

/// The stored field string, used directly as the index key.
fn local_index(doc: &Value) -> String {
    doc["local_date_time"].as_str().unwrap().to_string()
}

fn loaded_local(store: &DocumentStore, id: &str) -> LocalDateTime {
    store.load::<Foo>(id).local_date_time
}

/// Store `base`, `base + 1min`, `base + 2min`; query equality and `>`/`>=`
/// descending.
fn queries_above(base: LocalDateTime) {
    let store = store_three([
        base,
        base.checked_add(Duration::from_minutes(1)).unwrap(),
        base.checked_add(Duration::from_minutes(2)).unwrap(),
    ]);

    let eq = store.query(local_index, Cmp::Eq, &base.to_string(), None);
    assert_eq!(eq, vec!["foos/1"]);

    let above = store.query(local_index, Cmp::Gt, &base.to_string(), Some(Order::Desc));
    assert_eq!(above.len(), 2);
    assert!(loaded_local(&store, &above[0]) > loaded_local(&store, &above[1]));

    let at_or_above = store.query(local_index, Cmp::Gte, &base.to_string(), Some(Order::Desc));
    assert_eq!(at_or_above.len(), 3);
    assert!(loaded_local(&store, &at_or_above[0]) > loaded_local(&store, &at_or_above[1]));
    assert!(loaded_local(&store, &at_or_above[1]) > loaded_local(&store, &at_or_above[2]));
}

/// Store `base`, `base - 1min`, `base - 2min`; query equality and `<`/`<=`
/// ascending.
fn queries_below(base: LocalDateTime) {
    let store = store_three([
        base,
        base.checked_sub(Duration::from_minutes(1)).unwrap(),
        base.checked_sub(Duration::from_minutes(2)).unwrap(),
    ]);

    let eq = store.query(local_index, Cmp::Eq, &base.to_string(), None);
    assert_eq!(eq, vec!["foos/1"]);

    let below = store.query(local_index, Cmp::Lt, &base.to_string(), Some(Order::Asc));
    assert_eq!(below.len(), 2);
    assert!(loaded_local(&store, &below[0]) < loaded_local(&store, &below[1]));

    let at_or_below = store.query(local_index, Cmp::Lte, &base.to_string(), Some(Order::Asc));
    assert_eq!(at_or_below.len(), 3);
    assert!(loaded_local(&store, &at_or_below[0]) < loaded_local(&store, &at_or_below[1]));
    assert!(loaded_local(&store, &at_or_below[1]) < loaded_local(&store, &at_or_below[2]));
}

#[test]
fn local_date_time_queries_mid_range() {
    queries_above(LocalDateTime::new(2024, 3, 15, 9, 30, 45, 0).unwrap());
}

#[test]
fn local_date_time_queries_iso_min() {
    queries_above(LocalDateTime::MIN);
}

#[test]
fn local_date_time_queries_iso_max() {
    queries_below(LocalDateTime::MAX);
}

#[test]
fn stored_text_order_equals_chronological_order() {
    // Values chosen so naive variable-width encodings would sort wrongly.
    let store = store_three([
        LocalDateTime::new(999, 12, 31, 23, 59, 59, 9_999_999).unwrap(),
        LocalDateTime::new(1000, 1, 1, 0, 0, 0, 0).unwrap(),
        LocalDateTime::new(2024, 1, 1, 0, 0, 0, 1).unwrap(),
    ]);
    let all = store.query(
        local_index,
        Cmp::Gte,
        &LocalDateTime::MIN.to_string(),
        Some(Order::Asc),
    );
    assert_eq!(all, vec!["foos/1", "foos/2", "foos/3"]);
}
