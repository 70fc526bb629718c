// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Anchored time slots.
//!
//! A [`TimeSlot`] is an [`HourlyRange`] that also knows where its timetable
//! begins, so it can report how many hours into the timetable it starts.
//! The anchor is owned by the slot: moving a slot into another column keeps
//! its anchor as-is.

use crate::codec::{self, HOURS_PER_DAY};
use crate::error::TimeResult;
use crate::range::{HourlyRange, RangeInput};
use qtty::Hours;
use std::fmt;

/// Timetable start used when none is supplied.
pub const DEFAULT_TIMETABLE_START: &str = "09:00";

/// A time range measured against a timetable anchor.
///
/// # Examples
///
/// ```
/// use timetable_hours::TimeSlot;
///
/// let slot = TimeSlot::new("08:00", "09:00").unwrap();
/// // 08:00 is 23 hours after the default 09:00 anchor.
/// assert_eq!(slot.time_from_timetable_start().value(), 23.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    range: HourlyRange,
    timetable_start_time: String,
    timetable_start_hour: Hours,
}

impl TimeSlot {
    /// Creates a slot anchored at [`DEFAULT_TIMETABLE_START`].
    pub fn new(start_time: &str, end_time: &str) -> TimeResult<Self> {
        Self::with_timetable_start(start_time, end_time, DEFAULT_TIMETABLE_START)
    }

    /// Creates a slot with an explicit anchor.
    ///
    /// The range is validated strictly; the anchor follows the lenient rules
    /// of [`set_timetable_start_time`](Self::set_timetable_start_time).
    pub fn with_timetable_start(
        start_time: &str,
        end_time: &str,
        timetable_start_time: &str,
    ) -> TimeResult<Self> {
        let range = HourlyRange::new(start_time, end_time)?;
        Ok(Self::from_range(range, timetable_start_time))
    }

    /// Creates a slot from the editor's raw pair and an optional anchor.
    pub fn from_input(input: &RangeInput, timetable_start_time: Option<&str>) -> TimeResult<Self> {
        let range = HourlyRange::from_input(input)?;
        Ok(Self::from_range(
            range,
            timetable_start_time.unwrap_or(DEFAULT_TIMETABLE_START),
        ))
    }

    /// Wraps an existing range.
    pub fn from_range(range: HourlyRange, timetable_start_time: &str) -> Self {
        let mut slot = Self {
            range,
            timetable_start_time: String::new(),
            timetable_start_hour: Hours::new(0.0),
        };
        slot.set_timetable_start_time(timetable_start_time);
        slot
    }

    #[inline]
    pub fn range(&self) -> &HourlyRange {
        &self.range
    }

    #[inline]
    pub fn start_hour(&self) -> Hours {
        self.range.start_hour()
    }

    #[inline]
    pub fn end_hour(&self) -> Hours {
        self.range.end_hour()
    }

    #[inline]
    pub fn duration(&self) -> Hours {
        self.range.duration()
    }

    pub fn start_time(&self) -> String {
        self.range.start_time()
    }

    pub fn end_time(&self) -> String {
        self.range.end_time()
    }

    pub fn time_range_string(&self) -> String {
        self.range.time_range_string()
    }

    /// Anchor string exactly as last supplied, even if it did not parse.
    pub fn timetable_start_time(&self) -> &str {
        &self.timetable_start_time
    }

    #[inline]
    pub fn timetable_start_hour(&self) -> Hours {
        self.timetable_start_hour
    }

    /// Hours between the anchor and this slot's start, wrapped into `[0, 24)`.
    pub fn time_from_timetable_start(&self) -> Hours {
        let raw = self.range.start_hour().value() - self.timetable_start_hour.value();
        Hours::new(if raw < 0.0 { raw + HOURS_PER_DAY } else { raw })
    }

    pub fn overlaps_with(&self, other: &Self) -> bool {
        self.range.overlaps_with(&other.range)
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self.range.is_before(&other.range)
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self.range.is_after(&other.range)
    }

    pub fn set_start_time(&mut self, new_start: &str) -> TimeResult<()> {
        self.range.set_start_time(new_start)
    }

    pub fn set_duration(&mut self, hours: f64) -> TimeResult<()> {
        self.range.set_duration(hours)
    }

    pub fn set_end_time(&mut self, new_end: &str) -> TimeResult<()> {
        self.range.set_end_time(new_end)
    }

    /// Replaces the anchor.
    ///
    /// The string is stored verbatim.  If it is not a strict `HH:mm` time the
    /// anchor hour becomes `0` instead of failing, since this is fed straight
    /// from half-typed editor fields.
    pub fn set_timetable_start_time(&mut self, new_start: &str) {
        let hour = match codec::parse_time(new_start) {
            Ok(hour) => hour,
            Err(err) => {
                log::debug!("timetable start falls back to 00:00: {err}");
                0.0
            }
        };
        self.timetable_start_time = new_start.to_string();
        self.timetable_start_hour = Hours::new(hour);
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.range, f)
    }
}
