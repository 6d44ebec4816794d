//! Document round-trip suite
//!
//! Stores each temporal type as a document field, loads it back through the
//! codec, and inspects the raw stored JSON for the exact canonical encoding.
//! Mirrors the collaborator contract: store, load, `decode(encode(x)) == x`.

#[path = "../common/mod.rs"]
mod common;

mod duration_documents;
mod zoned_date_time_documents;
