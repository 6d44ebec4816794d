//! Zoned date-times and their structured record codec
//!
//! A [`ZonedDateTime`] pairs an [`Instant`] with an IANA time-zone
//! identifier. The document form is a structured record with exactly two
//! fields: the instant rendered at the UTC offset the zone observes at that
//! instant, and the zone identifier verbatim:
//!
//! ```json
//! { "OffsetDateTime": "2024-01-15T07:00:00.0000000-05:00", "Zone": "America/New_York" }
//! ```
//!
//! Strict equality includes the zone identifier: the same instant in two
//! zones is two different values. Ordering across zones is only meaningful on
//! the underlying instant, so this type implements neither `Ord` nor
//! `PartialOrd`; callers order through [`ZonedDateTime::compare_by_instant`]
//! or the [`ZonedDateTime::to_instant`] projection. The offset-qualified text
//! is NOT lexicographically order-preserving across zones and must never be
//! used as a sort key.
//!
//! Instants where a zone's rules are extrapolated (before standardized time
//! or in the far future) are outside the supported regime: the codec renders
//! whatever offset the zone database reports, at minute precision.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Offset, TimeZone};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tempora_core::error::{Error, Result};
use tempora_core::text::TextCursor;
use tempora_core::ticks::{
    NANOS_PER_TICK, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};

use crate::instant::{civil_from_ticks, ticks_from_civil};
use crate::{Instant, LocalDateTime};

/// Largest supported UTC offset magnitude, ±14:00
const MAX_OFFSET_SECONDS: i64 = 14 * 3600;

/// Resolve an IANA zone identifier against the embedded zone database
///
/// The database is compiled in, read-only, and safe to consult from any
/// thread without coordination. Fails with `UnknownZone` when the identifier
/// is not listed.
pub fn resolve_zone(id: &str) -> Result<Tz> {
    match Tz::from_str(id) {
        Ok(zone) => Ok(zone),
        Err(_) => {
            tracing::debug!(zone = id, "zone identifier not found in the zone database");
            Err(Error::UnknownZone(id.to_string()))
        }
    }
}

/// An instant paired with the time zone it is viewed in
///
/// Construction validates that the instant lies within the supported ISO
/// calendar range, so rendering the zone-local form cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ZonedDateTimeRecord", try_from = "ZonedDateTimeRecord")]
pub struct ZonedDateTime {
    instant: Instant,
    zone: Tz,
}

impl ZonedDateTime {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Pair an instant with a zone
    ///
    /// Fails with `Range` when the instant lies outside
    /// [`Instant::MIN_ISO`]..=[`Instant::MAX_ISO`].
    pub fn new(instant: Instant, zone: Tz) -> Result<Self> {
        if !instant.is_within_iso_range() {
            return Err(Error::range(format!(
                "instant {} ticks is outside the supported ISO calendar range",
                instant.as_ticks()
            )));
        }
        Ok(ZonedDateTime { instant, zone })
    }

    /// Pair an instant with a zone looked up by identifier
    pub fn from_zone_id(instant: Instant, zone_id: &str) -> Result<Self> {
        Self::new(instant, resolve_zone(zone_id)?)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The zone-independent instant, the sortable projection of this value
    #[inline]
    pub fn to_instant(self) -> Instant {
        self.instant
    }

    /// The time zone
    #[inline]
    pub fn zone(self) -> Tz {
        self.zone
    }

    /// The IANA zone identifier
    #[inline]
    pub fn zone_id(self) -> &'static str {
        self.zone.name()
    }

    /// The UTC offset in seconds the zone observes at this instant
    pub fn offset_seconds(self) -> i32 {
        let (date, tick_of_day) = civil_from_ticks(self.instant.as_ticks())
            .expect("instant is validated within the ISO calendar range");
        let seconds = (tick_of_day / TICKS_PER_SECOND) as u32;
        let nanos = ((tick_of_day % TICKS_PER_SECOND) * NANOS_PER_TICK) as u32;
        let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, nanos)
            .expect("tick-of-day always fits a civil day");
        self.zone
            .offset_from_utc_datetime(&date.and_time(time))
            .fix()
            .local_minus_utc()
    }

    /// The zone-local calendar date-time at this instant
    ///
    /// Fails with `Range` when the offset shifts the local form outside
    /// years 1..=9999 (possible within a day of the ISO sentinels).
    pub fn local_date_time(self) -> Result<LocalDateTime> {
        let local_ticks = self
            .instant
            .as_ticks()
            .checked_add(self.offset_seconds() as i64 * TICKS_PER_SECOND)
            .ok_or_else(|| Error::range("offset-shifted instant overflows the tick range"))?;
        let (date, tick_of_day) = civil_from_ticks(local_ticks)
            .ok_or_else(|| Error::range("offset-shifted instant leaves the civil calendar"))?;
        LocalDateTime::from_date_and_ticks(date, tick_of_day)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// Order two zoned values by their underlying instants, ignoring zones
    ///
    /// This is the only supported ordering. Two values at the same instant in
    /// different zones compare `Equal` here while remaining unequal under
    /// strict equality.
    pub fn compare_by_instant(self, other: ZonedDateTime) -> Ordering {
        self.instant.cmp(&other.instant)
    }

    // =========================================================================
    // Codec
    // =========================================================================

    /// Render the instant at the zone's offset,
    /// `yyyy-MM-ddTHH:mm:ss.fffffff±HH:MM`
    ///
    /// Offsets are rendered at minute precision; sub-minute offsets only
    /// occur in the pre-standardization regime that is out of scope here.
    pub fn offset_date_time(self) -> String {
        let offset_seconds = self.offset_seconds();
        let local_ticks =
            self.instant.as_ticks() + offset_seconds as i64 * TICKS_PER_SECOND;
        let (date, tick_of_day) = civil_from_ticks(local_ticks)
            .expect("offset-shifted instant stays within the civil calendar");

        let hour = tick_of_day / TICKS_PER_HOUR;
        let minute = (tick_of_day / TICKS_PER_MINUTE) % 60;
        let second = (tick_of_day / TICKS_PER_SECOND) % 60;
        let tick = tick_of_day % TICKS_PER_SECOND;

        let sign = if offset_seconds < 0 { '-' } else { '+' };
        let offset_magnitude = offset_seconds.unsigned_abs();
        let offset_hours = offset_magnitude / 3600;
        let offset_minutes = (offset_magnitude % 3600) / 60;

        format!(
            "{:04}-{:02}-{:02}T{hour:02}:{minute:02}:{second:02}.{tick:07}{sign}{offset_hours:02}:{offset_minutes:02}",
            date.year(),
            date.month(),
            date.day(),
        )
    }
}

/// Parse offset-qualified date-time text back to the instant it names
///
/// The local field values minus the offset give the zone-independent instant.
/// Fails with `Format` on grammar violations, `Range` when the fields do not
/// name a valid date-time, the offset exceeds ±14:00, or the instant leaves
/// the supported ISO range.
pub fn parse_offset_date_time(text: &str) -> Result<Instant> {
    let mut cur = TextCursor::new(text);
    let year = cur.fixed_digits(4, "expected four-digit year")?;
    cur.expect(b'-', "expected '-' after year")?;
    let month = cur.fixed_digits(2, "expected two-digit month")?;
    cur.expect(b'-', "expected '-' after month")?;
    let day = cur.fixed_digits(2, "expected two-digit day")?;
    cur.expect(b'T', "expected 'T' between date and time")?;
    let hour = cur.fixed_digits(2, "expected two-digit hour")?;
    cur.expect(b':', "expected ':' after hour")?;
    let minute = cur.fixed_digits(2, "expected two-digit minute")?;
    cur.expect(b':', "expected ':' after minute")?;
    let second = cur.fixed_digits(2, "expected two-digit second")?;
    cur.expect(b'.', "expected '.' before the fraction")?;
    let tick = cur.fixed_digits(7, "expected seven fractional digits")?;
    let negative_offset = if cur.accept(b'+') {
        false
    } else if cur.accept(b'-') {
        true
    } else {
        return Err(cur.error("expected offset sign '+' or '-'"));
    };
    let offset_hours = cur.fixed_digits(2, "expected two-digit offset hours")?;
    cur.expect(b':', "expected ':' in the offset")?;
    let offset_minutes = cur.fixed_digits(2, "expected two-digit offset minutes")?;
    cur.finish("unexpected trailing text")?;

    if year < 1 {
        return Err(Error::range(
            "year 0 is before the supported calendar".to_string(),
        ));
    }
    if hour > 23 || minute > 59 || second > 59 {
        return Err(Error::range(format!(
            "clock components {hour:02}:{minute:02}:{second:02} out of range"
        )));
    }
    let date = NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(|| {
        Error::range(format!(
            "{year:04}-{month:02}-{day:02} is not a valid calendar date"
        ))
    })?;
    if offset_minutes > 59 {
        return Err(Error::range(format!(
            "offset minutes {offset_minutes} exceed 59"
        )));
    }
    let offset_seconds = offset_hours as i64 * 3600 + offset_minutes as i64 * 60;
    if offset_seconds > MAX_OFFSET_SECONDS {
        return Err(Error::range(format!(
            "offset magnitude {offset_hours:02}:{offset_minutes:02} exceeds 14:00"
        )));
    }
    let offset_ticks = if negative_offset {
        -offset_seconds * TICKS_PER_SECOND
    } else {
        offset_seconds * TICKS_PER_SECOND
    };

    let tick_of_day = hour as i64 * TICKS_PER_HOUR
        + minute as i64 * TICKS_PER_MINUTE
        + second as i64 * TICKS_PER_SECOND
        + tick as i64;
    let local_ticks = ticks_from_civil(date, tick_of_day)
        .ok_or_else(|| Error::range(format!("{text:?} leaves the tick range")))?;
    let instant = Instant::from_ticks(
        local_ticks
            .checked_sub(offset_ticks)
            .ok_or_else(|| Error::range(format!("{text:?} leaves the tick range")))?,
    );
    if !instant.is_within_iso_range() {
        return Err(Error::range(format!(
            "{text:?} names an instant outside the supported ISO range"
        )));
    }
    Ok(instant)
}

// =============================================================================
// Structured record
// =============================================================================

/// The stored document form of a zoned date-time
///
/// Exactly two fields, named as they appear in stored documents. The offset
/// text alone pins the instant; the zone identifier restores the pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ZonedDateTimeRecord {
    /// The instant rendered at the zone's offset
    pub offset_date_time: String,
    /// The IANA zone identifier, verbatim
    pub zone: String,
}

impl From<ZonedDateTime> for ZonedDateTimeRecord {
    fn from(value: ZonedDateTime) -> Self {
        ZonedDateTimeRecord {
            offset_date_time: value.offset_date_time(),
            zone: value.zone_id().to_string(),
        }
    }
}

impl TryFrom<ZonedDateTimeRecord> for ZonedDateTime {
    type Error = Error;

    fn try_from(record: ZonedDateTimeRecord) -> Result<Self> {
        let instant = parse_offset_date_time(&record.offset_date_time)?;
        let zone = resolve_zone(&record.zone)?;
        ZonedDateTime::new(instant, zone)
    }
}
