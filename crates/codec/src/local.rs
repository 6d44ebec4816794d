//! Local (zone-free) calendar date-times
//!
//! A [`LocalDateTime`] pairs a proleptic Gregorian date in years 1..=9999
//! with a time-of-day at tick resolution. There is no zone and no offset:
//! two equal component tuples are the same value everywhere.
//!
//! The canonical document text is `yyyy-MM-ddTHH:mm:ss.fffffff`: every
//! field zero-padded to a fixed width, fraction always present, fields in
//! descending significance. That makes the encoding injective and gives it
//! the property the storage collaborator relies on: lexicographic order of
//! canonical texts equals chronological order of values, so an indexer can
//! compare encoded fields directly without decoding them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tempora_core::error::{Error, Result};
use tempora_core::text::TextCursor;
use tempora_core::ticks::{
    self, TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};

use crate::Duration;

/// A calendar date and time-of-day with no zone or offset
///
/// Ordering is component-wise (year, month, day, then tick-of-day), which is
/// chronological order and equals string order on the canonical text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalDateTime {
    year: i32,
    month: u8,
    day: u8,
    tick_of_day: i64,
}

impl LocalDateTime {
    /// The minimum supported value, `0001-01-01T00:00:00.0000000`
    pub const MIN: LocalDateTime = LocalDateTime {
        year: 1,
        month: 1,
        day: 1,
        tick_of_day: 0,
    };

    /// The maximum supported value, `9999-12-31T23:59:59.9999999`
    pub const MAX: LocalDateTime = LocalDateTime {
        year: 9999,
        month: 12,
        day: 31,
        tick_of_day: TICKS_PER_DAY - 1,
    };

    // =========================================================================
    // Construction
    // =========================================================================

    /// Create a value from calendar and clock components
    ///
    /// `tick` is the sub-second component in 100 ns ticks, `0..=9_999_999`.
    /// Fails with `Range` when the components do not name a real
    /// proleptic-Gregorian date-time inside years 1..=9999.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        tick: u32,
    ) -> Result<Self> {
        if hour > 23 {
            return Err(Error::range(format!("hour {hour} exceeds 23")));
        }
        if minute > 59 {
            return Err(Error::range(format!("minute {minute} exceeds 59")));
        }
        if second > 59 {
            return Err(Error::range(format!("second {second} exceeds 59")));
        }
        if tick > 9_999_999 {
            return Err(Error::range(format!(
                "tick-of-second {tick} exceeds 9999999"
            )));
        }
        let tick_of_day = hour as i64 * TICKS_PER_HOUR
            + minute as i64 * TICKS_PER_MINUTE
            + second as i64 * TICKS_PER_SECOND
            + tick as i64;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            Error::range(format!(
                "{year:04}-{month:02}-{day:02} is not a valid calendar date"
            ))
        })?;
        Self::from_date_and_ticks(date, tick_of_day)
    }

    /// Create a value from a calendar date and a tick-of-day
    ///
    /// Fails with `Range` when the year is outside 1..=9999 or the
    /// tick-of-day does not fit a single day.
    pub fn from_date_and_ticks(date: NaiveDate, tick_of_day: i64) -> Result<Self> {
        if !(1..=9999).contains(&date.year()) {
            return Err(Error::range(format!(
                "year {} outside the supported calendar (1..=9999)",
                date.year()
            )));
        }
        if !(0..TICKS_PER_DAY).contains(&tick_of_day) {
            return Err(Error::range(format!(
                "tick-of-day {tick_of_day} does not fit a single day"
            )));
        }
        Ok(LocalDateTime {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
            tick_of_day,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Calendar year, 1..=9999
    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Calendar month, 1..=12
    #[inline]
    pub const fn month(self) -> u32 {
        self.month as u32
    }

    /// Day of month, 1..=31
    #[inline]
    pub const fn day(self) -> u32 {
        self.day as u32
    }

    /// Hour of day, 0..=23
    #[inline]
    pub const fn hour(self) -> u32 {
        (self.tick_of_day / TICKS_PER_HOUR) as u32
    }

    /// Minute of hour, 0..=59
    #[inline]
    pub const fn minute(self) -> u32 {
        ((self.tick_of_day / TICKS_PER_MINUTE) % 60) as u32
    }

    /// Second of minute, 0..=59
    #[inline]
    pub const fn second(self) -> u32 {
        ((self.tick_of_day / TICKS_PER_SECOND) % 60) as u32
    }

    /// Sub-second component in ticks, 0..=9_999_999
    #[inline]
    pub const fn tick_of_second(self) -> u32 {
        (self.tick_of_day % TICKS_PER_SECOND) as u32
    }

    /// Ticks elapsed since midnight
    #[inline]
    pub const fn tick_of_day(self) -> i64 {
        self.tick_of_day
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Add an elapsed duration, `None` when the result leaves years 1..=9999
    ///
    /// Days are exactly 86,400 seconds long here; there is no zone whose
    /// transitions could stretch or shrink them.
    pub fn checked_add(self, duration: Duration) -> Option<LocalDateTime> {
        let total = self.tick_of_day.checked_add(duration.total_ticks())?;
        let (day_delta, tick_of_day) = ticks::to_days_and_tick_of_day(total);
        let date = NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)?
            .checked_add_signed(TimeDelta::try_days(day_delta)?)?;
        if !(1..=9999).contains(&date.year()) {
            return None;
        }
        Some(LocalDateTime {
            year: date.year(),
            month: date.month() as u8,
            day: date.day() as u8,
            tick_of_day,
        })
    }

    /// Subtract an elapsed duration, `None` when the result leaves the range
    pub fn checked_sub(self, duration: Duration) -> Option<LocalDateTime> {
        self.checked_add(duration.checked_neg()?)
    }
}

// =============================================================================
// Canonical text codec
// =============================================================================

impl fmt::Display for LocalDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:07}",
            self.year,
            self.month,
            self.day,
            self.hour(),
            self.minute(),
            self.second(),
            self.tick_of_second()
        )
    }
}

impl FromStr for LocalDateTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cur = TextCursor::new(s);
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
        cur.finish("unexpected trailing text")?;

        Self::new(year as i32, month, day, hour, minute, second, tick)
    }
}

impl Serialize for LocalDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LocalDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
