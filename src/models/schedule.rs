//! Work schedule model.
//!
//! This module defines the [`Schedule`] struct representing an employee's
//! expected start and end time-of-day.

use crate::calculation::parse_time_to_minutes;
use crate::error::EngineResult;

/// An employee's expected start and end time-of-day, in minutes since
/// midnight.
///
/// Callers normally supply `start < end`. Overnight schedules
/// (`end < start`, e.g. 22:00–06:00) are accepted, and their
/// [`scheduled_minutes`](Schedule::scheduled_minutes) is a plain signed
/// subtraction that comes out negative; night-differential accounting is
/// unaffected because it never consults the schedule.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Schedule;
///
/// let schedule = Schedule::parse("09:00", "18:00").unwrap();
/// assert_eq!(schedule.start, 540);
/// assert_eq!(schedule.end, 1080);
/// assert_eq!(schedule.scheduled_minutes(), 540);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Scheduled start, minutes since midnight in [0, 1440).
    pub start: u32,
    /// Scheduled end, minutes since midnight in [0, 1440).
    pub end: u32,
}

impl Schedule {
    /// Parses a schedule from a pair of `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTimeFormat`](crate::error::EngineError)
    /// if either string is malformed or out of range.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::Schedule;
    ///
    /// let schedule = Schedule::parse("22:00", "06:00").unwrap();
    /// assert!(schedule.is_overnight());
    /// assert!(Schedule::parse("9am", "18:00").is_err());
    /// ```
    pub fn parse(start: &str, end: &str) -> EngineResult<Self> {
        Ok(Self {
            start: parse_time_to_minutes(start)?,
            end: parse_time_to_minutes(end)?,
        })
    }

    /// Returns the scheduled span in minutes as `end - start`.
    ///
    /// Plain subtraction: negative for overnight schedules. Callers doing
    /// regular/overtime math clamp the downstream results to zero rather
    /// than wrapping this value around midnight.
    pub fn scheduled_minutes(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Returns `true` when the schedule ends on the day after it starts.
    pub fn is_overnight(&self) -> bool {
        self.end < self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    /// SCH-001: standard day schedule
    #[test]
    fn test_parse_day_schedule() {
        let schedule = Schedule::parse("09:00", "18:00").unwrap();
        assert_eq!(schedule.start, 540);
        assert_eq!(schedule.end, 1080);
        assert_eq!(schedule.scheduled_minutes(), 540);
        assert!(!schedule.is_overnight());
    }

    /// SCH-002: overnight schedule keeps the plain subtraction
    #[test]
    fn test_overnight_schedule_has_negative_span() {
        let schedule = Schedule::parse("22:00", "06:00").unwrap();
        assert_eq!(schedule.start, 1320);
        assert_eq!(schedule.end, 360);
        assert_eq!(schedule.scheduled_minutes(), -960);
        assert!(schedule.is_overnight());
    }

    #[test]
    fn test_parse_rejects_malformed_start() {
        let error = Schedule::parse("9am", "18:00").unwrap_err();
        assert!(matches!(error, EngineError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_parse_rejects_out_of_range_end() {
        let error = Schedule::parse("09:00", "24:00").unwrap_err();
        assert!(matches!(error, EngineError::InvalidTimeFormat { .. }));
    }

    #[test]
    fn test_midnight_to_midnight_is_zero_span() {
        let schedule = Schedule::parse("00:00", "00:00").unwrap();
        assert_eq!(schedule.scheduled_minutes(), 0);
        assert!(!schedule.is_overnight());
    }
}
