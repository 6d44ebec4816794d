//! Temporal value types and their document codecs
//!
//! This crate defines the value types a document store round-trips and
//! queries:
//! - [`Duration`]: signed elapsed time at 100 ns tick resolution
//! - [`LocalDateTime`]: calendar date and time-of-day with no zone
//! - [`Instant`]: absolute point on the time line, ticks since the Unix epoch
//! - [`ZonedDateTime`]: an instant paired with an IANA zone identifier
//!
//! Each type commits to one canonical stored form (string or structured
//! record) reachable through `Display`/`FromStr` and serde, and to the
//! comparison semantics a query layer may rely on. Where the canonical text
//! is not directly comparable, the type exposes an explicit order-preserving
//! projection (`index_key`, `to_instant`) instead.
//!
//! All operations are pure, synchronous and stateless; values are `Copy` and
//! immutable, so concurrent use needs no coordination. The only shared
//! resource is the compiled-in zone database, which is read-only.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod duration;
pub mod instant;
pub mod local;
pub mod zoned;

pub use duration::Duration;
pub use instant::Instant;
pub use local::LocalDateTime;
pub use zoned::{parse_offset_date_time, resolve_zone, ZonedDateTime, ZonedDateTimeRecord};

// Re-export the zone type so callers can name zones without depending on
// chrono-tz directly.
pub use chrono_tz::Tz;
