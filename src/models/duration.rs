//! Duration model and display formatting.
//!
//! This module defines the [`WorkDuration`] struct used for every metric the
//! engine reports, along with the lenient display formatter consumed by
//! report views.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative span of time broken into hours and minutes.
///
/// The invariant `hours * 60 + minutes == total_minutes` holds for every
/// value built through [`WorkDuration::from_minutes`], which is the only
/// constructor used by the engine.
///
/// Serializes with camelCase field names (`totalMinutes`) to match the wire
/// format consumed by punch-out handlers and reporting jobs.
///
/// # Example
///
/// ```
/// use attendance_engine::models::WorkDuration;
///
/// let duration = WorkDuration::from_minutes(150);
/// assert_eq!(duration.hours, 2);
/// assert_eq!(duration.minutes, 30);
/// assert_eq!(duration.total_minutes, 150);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDuration {
    /// Whole hours in the span.
    pub hours: u32,
    /// Remaining minutes in the span, in [0, 59].
    pub minutes: u32,
    /// The full span in minutes.
    pub total_minutes: u32,
}

impl WorkDuration {
    /// A zero-length duration.
    pub const ZERO: WorkDuration = WorkDuration {
        hours: 0,
        minutes: 0,
        total_minutes: 0,
    };

    /// Builds a duration from a total minute count.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::WorkDuration;
    ///
    /// assert_eq!(WorkDuration::from_minutes(90).hours, 1);
    /// assert_eq!(WorkDuration::from_minutes(90).minutes, 30);
    /// assert_eq!(WorkDuration::from_minutes(0), WorkDuration::ZERO);
    /// ```
    pub const fn from_minutes(total_minutes: u32) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
        }
    }
}

impl fmt::Display for WorkDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

/// Renders a duration as a display string like `"2h 30m"`.
///
/// An absent duration renders as `"0h 0m"` instead of failing. Report
/// consumers routinely pass partially populated or legacy-shaped records,
/// so this lenient default is part of the contract.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{WorkDuration, format_duration};
///
/// let duration = WorkDuration::from_minutes(150);
/// assert_eq!(format_duration(Some(&duration)), "2h 30m");
/// assert_eq!(format_duration(None), "0h 0m");
/// ```
pub fn format_duration(duration: Option<&WorkDuration>) -> String {
    match duration {
        Some(duration) => duration.to_string(),
        None => WorkDuration::ZERO.to_string(),
    }
}
