// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timetable columns: operating hours plus the slots booked inside them.

use crate::error::TimeResult;
use crate::range::{HourlyRange, RangeInput};
use crate::slot::TimeSlot;
use qtty::Hours;

/// One entry handed to a [`TimeColumn`]: either raw editor data or a slot
/// that already exists elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotEntry {
    /// Built into a new slot anchored at the column start.
    Raw(RangeInput),
    /// Kept as-is, anchor included.
    Slot(TimeSlot),
}

impl From<RangeInput> for SlotEntry {
    fn from(input: RangeInput) -> Self {
        SlotEntry::Raw(input)
    }
}

impl From<TimeSlot> for SlotEntry {
    fn from(slot: TimeSlot) -> Self {
        SlotEntry::Slot(slot)
    }
}

/// A column's operating range and its unordered slots.
///
/// # Examples
///
/// ```
/// use timetable_hours::{RangeInput, SlotEntry, TimeColumn};
///
/// let column = TimeColumn::new(
///     "09:00",
///     "18:00",
///     vec![
///         SlotEntry::from(RangeInput::new("13:00", "14:00")),
///         SlotEntry::from(RangeInput::new("09:00", "10:30")),
///     ],
/// )
/// .unwrap();
/// assert_eq!(column.first_available_hour().value(), 14.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeColumn {
    range: HourlyRange,
    slots: Vec<TimeSlot>,
}

impl TimeColumn {
    /// Builds a column from its bounds and a mix of raw and existing slots.
    ///
    /// Raw entries become slots anchored at `start_time`; the first invalid
    /// bound (column or slot) aborts construction.
    pub fn new<I>(start_time: &str, end_time: &str, entries: I) -> TimeResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<SlotEntry>,
    {
        let range = HourlyRange::new(start_time, end_time)?;
        let mut column = Self {
            range,
            slots: Vec::new(),
        };
        for entry in entries {
            column.add_slot(entry)?;
        }
        Ok(column)
    }

    /// Same as [`new`](Self::new) with the column bounds in raw form.
    pub fn from_input<I>(input: &RangeInput, entries: I) -> TimeResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<SlotEntry>,
    {
        Self::new(&input.start_time, &input.end_time, entries)
    }

    /// Appends one entry with the same anchoring rule as the constructor.
    pub fn add_slot(&mut self, entry: impl Into<SlotEntry>) -> TimeResult<()> {
        let slot = match entry.into() {
            SlotEntry::Raw(input) => {
                let range = HourlyRange::from_input(&input)?;
                TimeSlot::from_range(range, &self.range.start_time())
            }
            SlotEntry::Slot(slot) => slot,
        };
        self.slots.push(slot);
        Ok(())
    }

    #[inline]
    pub fn range(&self) -> &HourlyRange {
        &self.range
    }

    /// Slots in insertion order (not sorted).
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
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

    /// Latest slot end hour, or the column start when there are no slots.
    ///
    /// Slot order and overlaps are irrelevant: only the maximum end counts.
    pub fn first_available_hour(&self) -> Hours {
        self.slots
            .iter()
            .map(|slot| slot.end_hour().value())
            .reduce(f64::max)
            .map_or(self.range.start_hour(), Hours::new)
    }
}
