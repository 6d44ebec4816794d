//! Signed elapsed durations at tick precision
//!
//! A [`Duration`] is a signed 64-bit count of 100 ns ticks. The canonical
//! document text is `[-][d.]hh:mm:ss[.fffffff]`: the day field and the
//! fraction are omitted when zero, hours/minutes/seconds are two digits
//! zero-padded, and the fraction is seven digits when present. Every
//! representable value, including [`Duration::MIN`] and [`Duration::MAX`],
//! round-trips exactly through encode and decode.
//!
//! The canonical text is NOT lexicographically order-preserving: a minus sign
//! reverses the order of the remainder and the day field has no fixed width.
//! Indexers that compare encoded values without decoding must use
//! [`Duration::index_key`] instead.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tempora_core::error::{Error, Result};
use tempora_core::text::{fraction_to_ticks, TextCursor};
use tempora_core::ticks::{
    TICKS_PER_DAY, TICKS_PER_HOUR, TICKS_PER_MILLISECOND, TICKS_PER_MINUTE, TICKS_PER_SECOND,
};
use tempora_core::index_key;

/// Signed elapsed time with 100 ns resolution
///
/// ## Invariants
///
/// - Total ordering is the ordering of the underlying tick count, so it is
///   consistent with arithmetic difference.
/// - Arithmetic never wraps silently: the checked forms return `None` past
///   [`Duration::MIN`]/[`Duration::MAX`] and the operator forms panic.
/// - `decode(encode(d)) == d` for every value, with no sub-second precision
///   loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Duration(i64);

impl Duration {
    /// The zero-length duration
    pub const ZERO: Duration = Duration(0);

    /// The most negative representable duration (-10675199.02:48:05.4775808)
    pub const MIN: Duration = Duration(i64::MIN);

    /// The most positive representable duration (10675199.02:48:05.4775807)
    pub const MAX: Duration = Duration(i64::MAX);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a duration from a raw tick count
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Duration(ticks)
    }

    /// Create a duration from whole hours
    ///
    /// # Panics
    ///
    /// Panics when the tick count would leave the representable range.
    pub fn from_hours(hours: i64) -> Self {
        Duration(
            hours
                .checked_mul(TICKS_PER_HOUR)
                .expect("hour count overflows the tick range"),
        )
    }

    /// Create a duration from whole minutes
    ///
    /// # Panics
    ///
    /// Panics when the tick count would leave the representable range.
    pub fn from_minutes(minutes: i64) -> Self {
        Duration(
            minutes
                .checked_mul(TICKS_PER_MINUTE)
                .expect("minute count overflows the tick range"),
        )
    }

    /// Create a duration from whole seconds
    ///
    /// # Panics
    ///
    /// Panics when the tick count would leave the representable range.
    pub fn from_seconds(seconds: i64) -> Self {
        Duration(
            seconds
                .checked_mul(TICKS_PER_SECOND)
                .expect("second count overflows the tick range"),
        )
    }

    /// Create a duration from whole milliseconds
    ///
    /// # Panics
    ///
    /// Panics when the tick count would leave the representable range.
    pub fn from_millis(millis: i64) -> Self {
        Duration(
            millis
                .checked_mul(TICKS_PER_MILLISECOND)
                .expect("millisecond count overflows the tick range"),
        )
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Total tick count, the canonical scalar form
    #[inline]
    pub const fn total_ticks(self) -> i64 {
        self.0
    }

    /// Whole-day component (signed, truncated toward zero)
    #[inline]
    pub const fn days(self) -> i64 {
        self.0 / TICKS_PER_DAY
    }

    /// Hour component in `-23..=23`
    #[inline]
    pub const fn hours(self) -> i64 {
        (self.0 / TICKS_PER_HOUR) % 24
    }

    /// Minute component in `-59..=59`
    #[inline]
    pub const fn minutes(self) -> i64 {
        (self.0 / TICKS_PER_MINUTE) % 60
    }

    /// Second component in `-59..=59`
    #[inline]
    pub const fn seconds(self) -> i64 {
        (self.0 / TICKS_PER_SECOND) % 60
    }

    /// Sub-second component in ticks, in `-9999999..=9999999`
    #[inline]
    pub const fn subsecond_ticks(self) -> i64 {
        self.0 % TICKS_PER_SECOND
    }

    /// Whether this duration is shorter than zero
    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Add two durations, `None` when the sum leaves the representable range
    pub const fn checked_add(self, other: Duration) -> Option<Duration> {
        match self.0.checked_add(other.0) {
            Some(ticks) => Some(Duration(ticks)),
            None => None,
        }
    }

    /// Subtract a duration, `None` when the result leaves the range
    pub const fn checked_sub(self, other: Duration) -> Option<Duration> {
        match self.0.checked_sub(other.0) {
            Some(ticks) => Some(Duration(ticks)),
            None => None,
        }
    }

    /// Negate, `None` for [`Duration::MIN`] whose magnitude has no positive form
    pub const fn checked_neg(self) -> Option<Duration> {
        match self.0.checked_neg() {
            Some(ticks) => Some(Duration(ticks)),
            None => None,
        }
    }

    /// Absolute value, `None` for [`Duration::MIN`]
    pub const fn checked_abs(self) -> Option<Duration> {
        match self.0.checked_abs() {
            Some(ticks) => Some(Duration(ticks)),
            None => None,
        }
    }

    // =========================================================================
    // Index key
    // =========================================================================

    /// Fixed-width key whose byte order equals duration order
    ///
    /// For all durations `a`, `b`: `a < b` iff
    /// `a.index_key() < b.index_key()` as strings. This is the projection a
    /// query layer compares without decoding; the canonical text does not
    /// have this property.
    pub fn index_key(self) -> String {
        index_key::encode_ticks(self.0)
    }
}

impl Add for Duration {
    type Output = Duration;

    /// # Panics
    ///
    /// Panics when the sum leaves the representable range.
    fn add(self, rhs: Duration) -> Duration {
        self.checked_add(rhs)
            .expect("duration addition overflowed the tick range")
    }
}

impl Sub for Duration {
    type Output = Duration;

    /// # Panics
    ///
    /// Panics when the difference leaves the representable range.
    fn sub(self, rhs: Duration) -> Duration {
        self.checked_sub(rhs)
            .expect("duration subtraction overflowed the tick range")
    }
}

impl Neg for Duration {
    type Output = Duration;

    /// # Panics
    ///
    /// Panics for [`Duration::MIN`].
    fn neg(self) -> Duration {
        self.checked_neg()
            .expect("duration negation overflowed the tick range")
    }
}

// =============================================================================
// Canonical text codec
// =============================================================================

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format from the unsigned magnitude so MIN needs no special case.
        let magnitude = self.0.unsigned_abs();
        let days = magnitude / TICKS_PER_DAY as u64;
        let hours = (magnitude / TICKS_PER_HOUR as u64) % 24;
        let minutes = (magnitude / TICKS_PER_MINUTE as u64) % 60;
        let seconds = (magnitude / TICKS_PER_SECOND as u64) % 60;
        let fraction = magnitude % TICKS_PER_SECOND as u64;

        if self.0 < 0 {
            f.write_str("-")?;
        }
        if days > 0 {
            write!(f, "{days}.")?;
        }
        write!(f, "{hours:02}:{minutes:02}:{seconds:02}")?;
        if fraction > 0 {
            write!(f, ".{fraction:07}")?;
        }
        Ok(())
    }
}

impl FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut cur = TextCursor::new(s);
        let negative = cur.accept(b'-');

        // The first digit run is the day count when a '.' follows, otherwise
        // it is the hour field itself.
        let (first, first_width) = cur.digit_run(1, 8, "expected a digit")?;
        let (days, hours) = if cur.accept(b'.') {
            let hours = cur.fixed_digits(2, "expected two-digit hours after the day field")?;
            (first, hours)
        } else {
            if first_width > 2 {
                return Err(cur.error("hours field wider than two digits"));
            }
            (0, first as u32)
        };
        cur.expect(b':', "expected ':' after hours")?;
        let minutes = cur.fixed_digits(2, "expected two-digit minutes")?;
        cur.expect(b':', "expected ':' after minutes")?;
        let seconds = cur.fixed_digits(2, "expected two-digit seconds")?;
        let fraction = if cur.accept(b'.') {
            let (digits, width) = cur.digit_run(1, 7, "expected fractional digits after '.'")?;
            fraction_to_ticks(digits, width)
        } else {
            0
        };
        cur.finish("unexpected trailing text")?;

        if hours > 23 {
            return Err(Error::range(format!("hours component {hours} exceeds 23")));
        }
        if minutes > 59 {
            return Err(Error::range(format!(
                "minutes component {minutes} exceeds 59"
            )));
        }
        if seconds > 59 {
            return Err(Error::range(format!(
                "seconds component {seconds} exceeds 59"
            )));
        }

        // Accumulate in i128: the magnitude of MIN is one past i64::MAX.
        let magnitude = days as i128 * TICKS_PER_DAY as i128
            + hours as i128 * TICKS_PER_HOUR as i128
            + minutes as i128 * TICKS_PER_MINUTE as i128
            + seconds as i128 * TICKS_PER_SECOND as i128
            + fraction as i128;
        let ticks = if negative { -magnitude } else { magnitude };
        i64::try_from(ticks)
            .map(Duration)
            .map_err(|_| Error::range(format!("duration {s:?} exceeds the representable range")))
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
