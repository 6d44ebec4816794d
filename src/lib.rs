//! Tempora - temporal value types and document codecs
//!
//! Tempora provides rich temporal values (elapsed durations, local
//! date-times and zoned date-times) together with the canonical codecs that
//! map each of them to and from the representation a document store keeps,
//! and the comparison semantics a query planner applies to those
//! representations.
//!
//! # Quick Start
//!
//! ```
//! use tempora::{Duration, LocalDateTime};
//!
//! // A duration encodes to its canonical text and decodes back exactly.
//! let two_hours = Duration::from_hours(2);
//! assert_eq!(two_hours.to_string(), "02:00:00");
//! assert_eq!("02:00:00".parse::<Duration>().unwrap(), two_hours);
//!
//! // Local date-time text sorts chronologically as plain strings.
//! let earlier = LocalDateTime::new(2024, 3, 15, 9, 30, 0, 0).unwrap();
//! let later = LocalDateTime::new(2024, 3, 15, 9, 31, 0, 0).unwrap();
//! assert!(earlier.to_string() < later.to_string());
//! ```
//!
//! # Comparison semantics
//!
//! [`LocalDateTime`] text is lexicographically order-preserving, so stored
//! fields compare directly. [`Duration`] text is not; indexers compare
//! [`Duration::index_key`] instead. [`ZonedDateTime`] has no default
//! ordering at all; project through [`ZonedDateTime::to_instant`] (or use
//! [`ZonedDateTime::compare_by_instant`]) before sorting.

// Re-export the public API from the codec crate.
pub use tempora_codec::{
    parse_offset_date_time, resolve_zone, Duration, Instant, LocalDateTime, Tz, ZonedDateTime,
    ZonedDateTimeRecord,
};
pub use tempora_core::{Error, Result};
