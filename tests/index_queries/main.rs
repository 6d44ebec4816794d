//! Index query suite
//!
//! Exercises the filtered/sorted query side of the collaborator contract:
//! the store compares one derived string per document lexicographically,
//! never decoding temporal values. Local date-time fields compare as stored;
//! durations compare through their order-preserving index key; zoned values
//! compare only through the instant projection.

#[path = "../common/mod.rs"]
mod common;

mod local_date_time_queries;
