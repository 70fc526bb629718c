// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `HH:mm` ⇄ decimal-hour codec.
//!
//! A *decimal hour* is a time of day expressed as a float in `[0, 24)`:
//! `09:30` is `9.5`, `23:45` is `23.75`.  This module is the only place where
//! strings are interpreted; every other type in the crate stores decimal hours
//! and formats them back through [`format_time`].
//!
//! Parsing is strict (two-digit hour `00`–`23`, a colon, two-digit minute
//! `00`–`59`) and reports failures through [`TimeError`].  Formatting wraps
//! values `>= 24` and rounds to the nearest minute.

use crate::error::{TimeError, TimeResult};
use chrono::{NaiveTime, Timelike};

/// Hours in one clock cycle.
pub const HOURS_PER_DAY: f64 = 24.0;

const MINUTES_PER_HOUR: f64 = 60.0;

// ═══════════════════════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════════════════════

/// Parse a strict `"HH:mm"` string into a decimal hour.
///
/// # Examples
///
/// ```
/// use timetable_hours::parse_time;
///
/// assert_eq!(parse_time("11:30").unwrap(), 11.5);
/// assert!(parse_time("9:30").is_err());
/// assert!(parse_time("24:00").is_err());
/// ```
pub fn parse_time(input: &str) -> TimeResult<f64> {
    let invalid = || TimeError::InvalidFormat(input.to_string());

    let bytes = input.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return Err(invalid());
    }
    let hour = two_digits(bytes[0], bytes[1]).ok_or_else(invalid)?;
    let minute = two_digits(bytes[3], bytes[4]).ok_or_else(invalid)?;
    if hour > 23 || minute > 59 {
        return Err(invalid());
    }

    Ok(f64::from(hour) + f64::from(minute) / MINUTES_PER_HOUR)
}

#[inline]
fn two_digits(tens: u8, units: u8) -> Option<u32> {
    if tens.is_ascii_digit() && units.is_ascii_digit() {
        Some(u32::from(tens - b'0') * 10 + u32::from(units - b'0'))
    } else {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Formatting
// ═══════════════════════════════════════════════════════════════════════════

/// Format a decimal hour as a zero-padded `"HH:mm"` string.
///
/// Values `>= 24` wrap around the clock, minutes are rounded to the nearest
/// whole minute and a rounded `60` rolls into the next hour.  Negative and
/// non-finite inputs are rejected.
///
/// # Examples
///
/// ```
/// use timetable_hours::format_time;
///
/// assert_eq!(format_time(9.5).unwrap(), "09:30");
/// assert_eq!(format_time(25.5).unwrap(), "01:30");
/// assert_eq!(format_time(23.999).unwrap(), "00:00");
/// assert!(format_time(-1.0).is_err());
/// ```
pub fn format_time(hour: f64) -> TimeResult<String> {
    let (h, m) = clock_minutes(hour)?;
    Ok(format!("{h:02}:{m:02}"))
}

/// Formats an hour already known to be finite and non-negative.
pub(crate) fn format_hour(hour: f64) -> String {
    let total = rounded_minutes(hour);
    format!("{:02}:{:02}", (total / 60) % 24, total % 60)
}

fn clock_minutes(hour: f64) -> TimeResult<(u32, u32)> {
    if !hour.is_finite() || hour < 0.0 {
        return Err(TimeError::InvalidHour(hour));
    }
    let total = rounded_minutes(hour);
    Ok(((total / 60) % 24, total % 60))
}

#[inline]
fn rounded_minutes(hour: f64) -> u32 {
    ((hour % HOURS_PER_DAY) * MINUTES_PER_HOUR).round() as u32
}

/// Wrap any finite hour value onto the `[0, 24)` clock.
#[inline]
pub(crate) fn wrap_hour(hour: f64) -> f64 {
    hour.rem_euclid(HOURS_PER_DAY)
}

// ═══════════════════════════════════════════════════════════════════════════
// chrono interop
// ═══════════════════════════════════════════════════════════════════════════

/// Decimal hour of a [`NaiveTime`], including seconds and sub-seconds.
pub fn hour_from_naive_time(time: NaiveTime) -> f64 {
    let seconds = f64::from(time.num_seconds_from_midnight())
        + f64::from(time.nanosecond().min(999_999_999)) / 1e9;
    seconds / 3_600.0
}

/// [`NaiveTime`] at minute resolution for a decimal hour.
///
/// Follows the same wrap and rounding rules as [`format_time`]; returns `None`
/// for negative or non-finite input.
pub fn naive_time_from_hour(hour: f64) -> Option<NaiveTime> {
    let (h, m) = clock_minutes(hour).ok()?;
    NaiveTime::from_hms_opt(h, m, 0)
}
