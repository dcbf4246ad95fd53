//! Time-of-day handling for the weekly grid.
//!
//! Stored times and slot labels are plain zero-padded strings. The grid
//! only ever compares them at minute precision ("HH:MM"), so seconds are
//! dropped rather than parsed: `"09:00:00"` and `"09:00"` refer to the
//! same slot. No timezone conversion happens anywhere in this module.

use chrono::{Duration, NaiveTime};

/// Length of one period. Variable-length periods are not supported.
const PERIOD_MINUTES: i64 = 60;

/// Returns the minute-precision prefix of a time-of-day string, the
/// canonical comparison key for slot matching.
///
/// A string too short to hold "HH:MM" yields `None`, which callers treat
/// as non-matching. A malformed display value must never take the grid
/// down.
pub fn minute_key(time: &str) -> Option<&str> {
    time.get(..5)
}

/// True iff the entry start time and the slot label share the same
/// minute-precision prefix.
///
/// Matching is prefix-based on purpose, not full time parsing: both sides
/// are expected to use the zero-padded "HH:MM" convention.
pub fn slot_matches(entry_start: &str, slot_label: &str) -> bool {
    match (minute_key(entry_start), minute_key(slot_label)) {
        (Some(entry), Some(slot)) => entry == slot,
        _ => false,
    }
}

/// Computes the end of a period starting at `start` ("HH:MM"): exactly one
/// hour later, rolled into 24-hour wall-clock form. `"23:30"` wraps to
/// `"00:30"` with no date component tracked.
///
/// Returns `None` when the start time does not parse as "HH:MM".
pub fn end_of_period(start: &str) -> Option<String> {
    let key = minute_key(start)?;
    let start = NaiveTime::parse_from_str(key, "%H:%M").ok()?;
    let (end, _) = start.overflowing_add_signed(Duration::minutes(PERIOD_MINUTES));
    Some(end.format("%H:%M").to_string())
}
