//! Absolute points on the time line
//!
//! An [`Instant`] is a signed 64-bit count of 100 ns ticks since the Unix
//! epoch, independent of any calendar or zone. It is the zone-agnostic
//! projection of a zoned date-time and the value the query layer orders by.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Datelike, NaiveDate};
use tempora_core::index_key;
use tempora_core::ticks::{self, NANOS_PER_TICK, TICKS_PER_DAY};

use crate::Duration;

/// Day number of 1970-01-01 counted from 0001-01-01 (= day 1)
const EPOCH_DAYS_FROM_CE: i64 = 719_163;

/// An absolute point on the time line at tick resolution
///
/// Ordering is the ordering of the tick count; two instants are the same
/// moment regardless of which zone later renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Instant(i64);

impl Instant {
    /// The Unix epoch, 1970-01-01T00:00:00Z
    pub const UNIX_EPOCH: Instant = Instant(0);

    /// The earliest instant of the supported ISO calendar,
    /// 0001-01-01T00:00:00Z
    pub const MIN_ISO: Instant = Instant(-621_355_968_000_000_000);

    /// The latest instant of the supported ISO calendar,
    /// 9999-12-31T23:59:59.9999999Z
    pub const MAX_ISO: Instant = Instant(2_534_023_007_999_999_999);

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an instant from ticks since the Unix epoch
    #[inline]
    pub const fn from_ticks(ticks: i64) -> Self {
        Instant(ticks)
    }

    /// The current moment, truncated to tick resolution
    ///
    /// Uses the system clock. Returns the epoch if the clock reports a time
    /// before 1970 (e.g. after a bad clock reset).
    pub fn now() -> Self {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Instant((since_epoch.as_nanos() / NANOS_PER_TICK as u128) as i64)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Ticks since the Unix epoch
    #[inline]
    pub const fn as_ticks(self) -> i64 {
        self.0
    }

    /// Whether this instant lies inside the supported ISO calendar range
    #[inline]
    pub const fn is_within_iso_range(self) -> bool {
        self.0 >= Instant::MIN_ISO.0 && self.0 <= Instant::MAX_ISO.0
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    /// Shift forward by a duration, `None` when the tick count overflows
    pub const fn checked_add(self, duration: Duration) -> Option<Instant> {
        match self.0.checked_add(duration.total_ticks()) {
            Some(ticks) => Some(Instant(ticks)),
            None => None,
        }
    }

    /// Shift backward by a duration, `None` when the tick count overflows
    pub const fn checked_sub(self, duration: Duration) -> Option<Instant> {
        match self.0.checked_sub(duration.total_ticks()) {
            Some(ticks) => Some(Instant(ticks)),
            None => None,
        }
    }

    /// Elapsed time from `earlier` to `self`, `None` when not representable
    pub const fn checked_duration_since(self, earlier: Instant) -> Option<Duration> {
        match self.0.checked_sub(earlier.0) {
            Some(ticks) => Some(Duration::from_ticks(ticks)),
            None => None,
        }
    }

    // =========================================================================
    // Index key
    // =========================================================================

    /// Fixed-width key whose byte order equals instant order
    ///
    /// This is the sortable projection for zoned values: offset-qualified
    /// text reorders across zones, instants do not.
    pub fn index_key(self) -> String {
        index_key::encode_ticks(self.0)
    }
}

// =============================================================================
// Civil (proleptic Gregorian) conversion
// =============================================================================

/// Split a tick-since-epoch count into a civil UTC date and tick-of-day
///
/// `None` when the day count leaves chrono's calendar range (far outside the
/// ISO years this crate supports).
pub(crate) fn civil_from_ticks(ticks: i64) -> Option<(NaiveDate, i64)> {
    let (days, tick_of_day) = ticks::to_days_and_tick_of_day(ticks);
    let days_from_ce = days.checked_add(EPOCH_DAYS_FROM_CE)?;
    let date = NaiveDate::from_num_days_from_ce_opt(i32::try_from(days_from_ce).ok()?)?;
    Some((date, tick_of_day))
}

/// Combine a civil UTC date and tick-of-day into ticks since the epoch
///
/// `None` when the result is not representable; `tick_of_day` must be in
/// `0..TICKS_PER_DAY`.
pub(crate) fn ticks_from_civil(date: NaiveDate, tick_of_day: i64) -> Option<i64> {
    if !(0..TICKS_PER_DAY).contains(&tick_of_day) {
        return None;
    }
    let days = i64::from(date.num_days_from_ce()) - EPOCH_DAYS_FROM_CE;
    ticks::from_days_and_tick_of_day(days, tick_of_day)
}
