// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Timetable hours
//!
//! Time-of-day arithmetic for timetables.  Everything lives on a 24-hour clock
//! with no date component: times are `"HH:mm"` strings at the edges and
//! decimal hours (`9.5` = `09:30`) inside.
//!
//! # Core types
//!
//! - [`HourlyRange`] — start/end pair with duration, formatting, overlap and
//!   duration-preserving setters.  `end < start` means the range crosses
//!   midnight.
//! - [`TimeSlot`] — an [`HourlyRange`] measured against a timetable anchor
//!   (default [`DEFAULT_TIMETABLE_START`]).
//! - [`TimeColumn`] — operating bounds plus an unordered list of slots.
//! - [`parse_time`] / [`format_time`] — the `HH:mm` codec.
//!
//! # Error policy
//!
//! Constructors and [`parse_time`] are strict and return [`TimeError`].
//! Paths driven by in-progress editor input degrade instead:
//! [`HourlyRange::calculate_end_time`] hands back its input and
//! [`TimeSlot::set_timetable_start_time`] collapses an unparsable anchor to
//! `00:00`.
//!
//! # Features
//!
//! - `serde` — (de)serialisation of [`RangeInput`], [`HourlyRange`] and the
//!   summary views using the editor's camelCase keys.

mod codec;
mod column;
mod error;
mod range;
mod slot;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use codec::{
    format_time, hour_from_naive_time, naive_time_from_hour, parse_time, HOURS_PER_DAY,
};
pub use column::{SlotEntry, TimeColumn};
pub use error::{TimeError, TimeResult};
pub use range::{HourlyRange, RangeDebugInfo, RangeInput, RangeSummary, RANGE_SEPARATOR};
pub use slot::{TimeSlot, DEFAULT_TIMETABLE_START};
