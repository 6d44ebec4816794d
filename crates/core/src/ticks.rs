//! Tick-unit constants and conversions
//!
//! All temporal values in the system share one sub-second unit: the tick,
//! 100 nanoseconds. A seven-digit decimal fraction in the canonical text
//! formats corresponds to exactly one tick, so every representable value has
//! an exact textual form and every canonical text decodes back to the exact
//! original value.

/// Nanoseconds per tick
pub const NANOS_PER_TICK: i64 = 100;

/// Ticks per microsecond
pub const TICKS_PER_MICROSECOND: i64 = 10;

/// Ticks per millisecond
pub const TICKS_PER_MILLISECOND: i64 = 10_000;

/// Ticks per second
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Ticks per minute
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;

/// Ticks per hour
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;

/// Ticks per day
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// Split a tick count into whole days and the tick within the day
///
/// Uses floored division, so the returned tick-of-day is always in
/// `0..TICKS_PER_DAY` even for negative inputs.
pub const fn to_days_and_tick_of_day(ticks: i64) -> (i64, i64) {
    (ticks.div_euclid(TICKS_PER_DAY), ticks.rem_euclid(TICKS_PER_DAY))
}

/// Combine a day count and a tick-of-day back into total ticks
///
/// Returns `None` when the result is not representable in a signed 64-bit
/// tick count.
pub fn from_days_and_tick_of_day(days: i64, tick_of_day: i64) -> Option<i64> {
    days.checked_mul(TICKS_PER_DAY)?.checked_add(tick_of_day)
}
