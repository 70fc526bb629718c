// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by the strict construction paths.

/// Result alias for fallible time-range operations.
pub type TimeResult<T> = Result<T, TimeError>;

/// Errors raised when strict input does not describe a valid time of day.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// A range was built with an empty start or end field.
    #[error("HourlyRange requires both startTime and endTime")]
    MissingBounds,

    /// A string is not a strict `HH:mm` time.
    #[error("Invalid time format: {0}. Expected HH:mm format.")]
    InvalidFormat(String),

    /// A decimal hour is negative, NaN or infinite.
    #[error("Invalid hour value: {0}. Expected a finite number >= 0.")]
    InvalidHour(f64),

    /// A duration is negative, NaN or infinite.
    #[error("Invalid duration: {0}. Expected a finite number of hours >= 0.")]
    InvalidDuration(f64),
}
