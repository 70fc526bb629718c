// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-of-day range implementation.
//!
//! This module provides:
//! - [`HourlyRange`]: a `{start, end}` pair of decimal hours on a 24-hour clock
//! - [`RangeInput`]: the raw `{startTime, endTime}` strings handed in by editors
//! - [`RangeSummary`] / [`RangeDebugInfo`]: plain-number views for the UI layer
//!
//! A range whose end is numerically smaller than its start crosses midnight
//! and ends on the following day.  Equal endpoints mean zero duration, never
//! a full day.

use crate::codec::{self, HOURS_PER_DAY};
use crate::error::{TimeError, TimeResult};
use chrono::NaiveTime;
use qtty::Hours;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Separator placed between the two endpoints of a formatted range.
pub const RANGE_SEPARATOR: char = '—';

/// Raw `{startTime, endTime}` pair as supplied by the editor layer.
///
/// Missing fields deserialize to empty strings and are rejected by
/// [`HourlyRange::from_input`] with [`TimeError::MissingBounds`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct RangeInput {
    pub start_time: String,
    pub end_time: String,
}

impl RangeInput {
    pub fn new(start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            start_time: start_time.into(),
            end_time: end_time.into(),
        }
    }
}

/// Numeric snapshot of a range: `{ startHour, endHour, duration }`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RangeSummary {
    pub start_hour: f64,
    pub end_hour: f64,
    pub duration: f64,
}

/// [`RangeSummary`] plus the formatted range string.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RangeDebugInfo {
    pub time_range: String,
    pub start_hour: f64,
    pub end_hour: f64,
    pub duration: f64,
}

/// A span on the 24-hour clock, stored as two decimal hours in `[0, 24)`.
///
/// The duration is always derived from the endpoints; setters recompute the
/// dependent endpoint before anything is written, so a rejected update leaves
/// the range untouched.
///
/// # Examples
///
/// ```
/// use timetable_hours::HourlyRange;
///
/// let range = HourlyRange::new("23:00", "01:00").unwrap();
/// assert_eq!(range.duration_hours(), 2.0);
/// assert_eq!(range.time_range_string(), "23:00—01:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRange {
    start: Hours,
    end: Hours,
}

impl HourlyRange {
    /// Creates a range from two strict `HH:mm` strings.
    ///
    /// Empty fields fail with [`TimeError::MissingBounds`]; malformed ones
    /// with [`TimeError::InvalidFormat`].
    pub fn new(start_time: &str, end_time: &str) -> TimeResult<Self> {
        if start_time.is_empty() || end_time.is_empty() {
            return Err(TimeError::MissingBounds);
        }
        let start = codec::parse_time(start_time)?;
        let end = codec::parse_time(end_time)?;
        Ok(Self::from_clock_hours(start, end))
    }

    /// Creates a range from the editor's raw `{startTime, endTime}` pair.
    pub fn from_input(input: &RangeInput) -> TimeResult<Self> {
        Self::new(&input.start_time, &input.end_time)
    }

    /// Creates a range from two [`NaiveTime`] values.
    ///
    /// Seconds are kept in the decimal hour; formatting rounds them away.
    pub fn from_naive_times(start: NaiveTime, end: NaiveTime) -> Self {
        Self::from_clock_hours(
            codec::hour_from_naive_time(start),
            codec::hour_from_naive_time(end),
        )
    }

    #[inline]
    fn from_clock_hours(start: f64, end: f64) -> Self {
        Self {
            start: Hours::new(start),
            end: Hours::new(end),
        }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn start_hour(&self) -> Hours {
        self.start
    }

    #[inline]
    pub fn end_hour(&self) -> Hours {
        self.end
    }

    /// Hours from start to end, adding a day when the range crosses midnight.
    pub fn duration(&self) -> Hours {
        let raw = self.end.value() - self.start.value();
        Hours::new(if raw < 0.0 { raw + HOURS_PER_DAY } else { raw })
    }

    /// [`duration`](Self::duration) as a plain number.
    #[inline]
    pub fn duration_hours(&self) -> f64 {
        self.duration().value()
    }

    pub fn start_time(&self) -> String {
        codec::format_hour(self.start.value())
    }

    pub fn end_time(&self) -> String {
        codec::format_hour(self.end.value())
    }

    /// `"HH:mm—HH:mm"`.
    pub fn time_range_string(&self) -> String {
        self.to_string()
    }

    // ── predicates ────────────────────────────────────────────────────

    /// Whether the two ranges share any instant.
    ///
    /// Ranges are half-open `[start, start + duration)`, so touching endpoints
    /// do not overlap.  Each range is laid on a linear timeline and `other` is
    /// also tried one day earlier and one day later, which catches overlaps
    /// where either side crosses midnight.
    pub fn overlaps_with(&self, other: &Self) -> bool {
        let (a_start, a_end) = self.linear_bounds();
        let (b_start, b_end) = other.linear_bounds();

        [-HOURS_PER_DAY, 0.0, HOURS_PER_DAY].iter().any(|shift| {
            let start = a_start.max(b_start + shift);
            let end = a_end.min(b_end + shift);
            start < end
        })
    }

    #[inline]
    fn linear_bounds(&self) -> (f64, f64) {
        let start = self.start.value();
        (start, start + self.duration_hours())
    }

    /// Compares start hours only; a range at `23:00` is before one at `01:00`.
    #[inline]
    pub fn is_before(&self, other: &Self) -> bool {
        self.start < other.start
    }

    /// Compares start hours only; see [`is_before`](Self::is_before).
    #[inline]
    pub fn is_after(&self, other: &Self) -> bool {
        self.start > other.start
    }

    // ── setters ───────────────────────────────────────────────────────

    /// Moves the range to `new_start`, keeping its duration.
    pub fn set_start_time(&mut self, new_start: &str) -> TimeResult<()> {
        let start = codec::parse_time(new_start)?;
        let end = codec::wrap_hour(start + self.duration_hours());
        *self = Self::from_clock_hours(start, end);
        Ok(())
    }

    /// Keeps the start and places the end `hours` later on the clock.
    pub fn set_duration(&mut self, hours: f64) -> TimeResult<()> {
        if !hours.is_finite() || hours < 0.0 {
            return Err(TimeError::InvalidDuration(hours));
        }
        self.end = Hours::new(codec::wrap_hour(self.start.value() + hours));
        Ok(())
    }

    /// Keeps the start and moves the end; the duration follows.
    pub fn set_end_time(&mut self, new_end: &str) -> TimeResult<()> {
        self.end = Hours::new(codec::parse_time(new_end)?);
        Ok(())
    }

    /// End time for a start time plus a duration, for live-editing forms.
    ///
    /// Never fails: an empty `start_time` yields `"00:00"`, and a negative or
    /// non-finite duration (or an unparsable start) returns `start_time`
    /// unchanged.
    ///
    /// ```
    /// use timetable_hours::HourlyRange;
    ///
    /// assert_eq!(HourlyRange::calculate_end_time("23:30", 1.5), "01:00");
    /// assert_eq!(HourlyRange::calculate_end_time("09:00", -1.0), "09:00");
    /// assert_eq!(HourlyRange::calculate_end_time("", 2.0), "00:00");
    /// ```
    pub fn calculate_end_time(start_time: &str, duration_hours: f64) -> String {
        if start_time.is_empty() {
            return codec::format_hour(0.0);
        }
        if !duration_hours.is_finite() || duration_hours < 0.0 {
            log::debug!("ignoring duration {duration_hours} for start {start_time:?}");
            return start_time.to_string();
        }
        match codec::parse_time(start_time) {
            Ok(start) => codec::format_hour(codec::wrap_hour(start + duration_hours)),
            Err(err) => {
                log::debug!("cannot compute end time: {err}");
                start_time.to_string()
            }
        }
    }

    // ── views ─────────────────────────────────────────────────────────

    pub fn to_object(&self) -> RangeSummary {
        RangeSummary {
            start_hour: self.start.value(),
            end_hour: self.end.value(),
            duration: self.duration_hours(),
        }
    }

    pub fn debug_info(&self) -> RangeDebugInfo {
        RangeDebugInfo {
            time_range: self.time_range_string(),
            start_hour: self.start.value(),
            end_hour: self.end.value(),
            duration: self.duration_hours(),
        }
    }
}

impl fmt::Display for HourlyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start_time(), RANGE_SEPARATOR, self.end_time())
    }
}

impl TryFrom<&RangeInput> for HourlyRange {
    type Error = TimeError;

    fn try_from(input: &RangeInput) -> TimeResult<Self> {
        Self::from_input(input)
    }
}

// Serde support for HourlyRange
//
// Serialises as the numeric summary; deserialises from the editor's string
// pair through the strict constructor.
#[cfg(feature = "serde")]
impl Serialize for HourlyRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("HourlyRange", 3)?;
        s.serialize_field("startHour", &self.start.value())?;
        s.serialize_field("endHour", &self.end.value())?;
        s.serialize_field("duration", &self.duration_hours())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for HourlyRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RangeInput::deserialize(deserializer)?;
        HourlyRange::from_input(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> HourlyRange {
        HourlyRange::new(start, end).unwrap()
    }

    #[test]
    fn test_range_creation() {
        let r = range("11:30", "12:30");
        assert_eq!(r.start_hour(), Hours::new(11.5));
        assert_eq!(r.end_hour(), Hours::new(12.5));
        assert_eq!(r.duration(), Hours::new(1.0));
        assert_eq!(r.time_range_string(), "11:30—12:30");
        assert_eq!(r.start_time(), "11:30");
        assert_eq!(r.end_time(), "12:30");
    }

    #[test]
    fn test_range_requires_both_bounds() {
        assert_eq!(HourlyRange::new("", "10:00"), Err(TimeError::MissingBounds));
        assert_eq!(HourlyRange::new("09:00", ""), Err(TimeError::MissingBounds));
        assert_eq!(
            HourlyRange::from_input(&RangeInput::default()),
            Err(TimeError::MissingBounds)
        );
    }

    #[test]
    fn test_range_rejects_malformed_bounds() {
        let err = HourlyRange::new("9:00", "10:00").unwrap_err();
        assert_eq!(err.to_string(), "Invalid time format: 9:00. Expected HH:mm format.");
        assert!(HourlyRange::new("09:00", "25:00").is_err());
    }

    #[test]
    fn test_duration_crosses_midnight() {
        assert_eq!(range("23:00", "01:00").duration_hours(), 2.0);
        assert_eq!(range("22:30", "00:00").duration_hours(), 1.5);
    }

    #[test]
    fn test_duration_equal_bounds_is_zero() {
        assert_eq!(range("10:00", "10:00").duration_hours(), 0.0);
        assert_eq!(range("00:00", "00:00").duration_hours(), 0.0);
    }

    #[test]
    fn test_overlap_touching_edges() {
        assert!(!range("09:00", "10:00").overlaps_with(&range("10:00", "11:00")));
        assert!(!range("10:00", "11:00").overlaps_with(&range("09:00", "10:00")));
    }

    #[test]
    fn test_overlap_partial_and_contained() {
        assert!(range("09:00", "11:00").overlaps_with(&range("10:00", "12:00")));
        assert!(range("09:00", "17:00").overlaps_with(&range("12:00", "13:00")));
        assert!(range("12:00", "13:00").overlaps_with(&range("09:00", "17:00")));
    }

    #[test]
    fn test_overlap_disjoint() {
        assert!(!range("09:00", "10:00").overlaps_with(&range("14:00", "15:00")));
    }

    #[test]
    fn test_overlap_across_midnight() {
        let late = range("23:00", "02:00");
        assert!(late.overlaps_with(&range("01:00", "03:00")));
        assert!(range("01:00", "03:00").overlaps_with(&late));
        assert!(late.overlaps_with(&range("22:00", "23:30")));
        assert!(!late.overlaps_with(&range("02:00", "04:00")));
        assert!(range("22:00", "03:00").overlaps_with(&range("23:00", "01:00")));
    }

    #[test]
    fn test_zero_length_never_overlaps() {
        assert!(!range("10:00", "10:00").overlaps_with(&range("09:00", "11:00")));
    }

    #[test]
    fn test_ordering_uses_start_hour_only() {
        let late = range("23:00", "01:00");
        let early = range("01:00", "02:00");
        assert!(early.is_before(&late));
        assert!(late.is_after(&early));
        assert!(!late.is_before(&early));
        assert!(!late.is_before(&late));
        assert!(!late.is_after(&late));
    }

    #[test]
    fn test_set_start_time_keeps_duration() {
        let mut r = range("09:00", "11:30");
        r.set_start_time("10:15").unwrap();
        assert_eq!(r.start_hour(), Hours::new(10.25));
        assert_eq!(r.end_hour(), Hours::new(12.75));
        assert_eq!(r.duration_hours(), 2.5);
    }

    #[test]
    fn test_set_start_time_wraps_end() {
        let mut r = range("09:00", "12:00");
        r.set_start_time("22:00").unwrap();
        assert_eq!(r.end_time(), "01:00");
        assert_eq!(r.duration_hours(), 3.0);
    }

    #[test]
    fn test_failed_setter_leaves_range_untouched() {
        let mut r = range("09:00", "11:30");
        let before = r;
        assert!(r.set_start_time("nope").is_err());
        assert!(r.set_end_time("12:75").is_err());
        assert!(r.set_duration(-1.0).is_err());
        assert!(r.set_duration(f64::NAN).is_err());
        assert_eq!(r, before);
    }

    #[test]
    fn test_set_duration() {
        let mut r = range("20:00", "21:00");
        r.set_duration(5.5).unwrap();
        assert_eq!(r.start_time(), "20:00");
        assert_eq!(r.end_time(), "01:30");
        assert_eq!(r.duration_hours(), 5.5);
    }

    #[test]
    fn test_set_end_time() {
        let mut r = range("09:00", "10:00");
        r.set_end_time("08:00").unwrap();
        assert_eq!(r.start_hour(), Hours::new(9.0));
        assert_eq!(r.duration_hours(), 23.0);
    }

    #[test]
    fn test_calculate_end_time() {
        assert_eq!(HourlyRange::calculate_end_time("23:30", 1.5), "01:00");
        assert_eq!(HourlyRange::calculate_end_time("09:00", 2.25), "11:15");
        assert_eq!(HourlyRange::calculate_end_time("09:00", 0.0), "09:00");
    }

    #[test]
    fn test_calculate_end_time_degrades() {
        assert_eq!(HourlyRange::calculate_end_time("", 1.0), "00:00");
        assert_eq!(HourlyRange::calculate_end_time("09:00", -1.0), "09:00");
        assert_eq!(HourlyRange::calculate_end_time("09:00", f64::NAN), "09:00");
        assert_eq!(HourlyRange::calculate_end_time("9am", 1.0), "9am");
    }

    #[test]
    fn test_views() {
        let r = range("23:00", "01:00");
        assert_eq!(
            r.to_object(),
            RangeSummary {
                start_hour: 23.0,
                end_hour: 1.0,
                duration: 2.0,
            }
        );
        let info = r.debug_info();
        assert_eq!(info.time_range, "23:00—01:00");
        assert_eq!(info.duration, 2.0);
        assert_eq!(format!("{r}"), info.time_range);
    }

    #[test]
    fn test_from_naive_times() {
        let r = HourlyRange::from_naive_times(
            NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 45, 0).unwrap(),
        );
        assert_eq!(r.duration_hours(), 1.5);
        assert_eq!(r, range("08:15", "09:45"));
    }
}
