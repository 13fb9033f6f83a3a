//! Time-of-day parsing and extraction.
//!
//! This module converts `HH:MM` schedule strings and punch timestamps into
//! minute-of-day values, the unit every downstream calculation works in.

use chrono::{NaiveDateTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parses a 24-hour `HH:MM` string into minutes since midnight.
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] when the separator is missing,
/// a field is not numeric, or the hour/minute is out of range.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_time_to_minutes;
///
/// assert_eq!(parse_time_to_minutes("09:00").unwrap(), 540);
/// assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
/// assert_eq!(parse_time_to_minutes("12:30").unwrap(), 750);
/// assert!(parse_time_to_minutes("24:00").is_err());
/// ```
pub fn parse_time_to_minutes(value: &str) -> EngineResult<u32> {
    let invalid = |message: &str| EngineError::InvalidTimeFormat {
        value: value.to_string(),
        message: message.to_string(),
    };

    let (hours, minutes) = value.split_once(':').ok_or_else(|| invalid("expected HH:MM"))?;
    let hours: u32 = hours.parse().map_err(|_| invalid("hour is not a number"))?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid("minute is not a number"))?;

    if hours > 23 {
        return Err(invalid("hour out of range 0-23"));
    }
    if minutes > 59 {
        return Err(invalid("minute out of range 0-59"));
    }

    Ok(hours * 60 + minutes)
}

/// Returns the wall-clock minute-of-day of a timestamp, in [0, 1440).
///
/// Seconds are ignored: the minute-of-day identifies the minute the
/// timestamp falls in, which is what lateness, undertime and the
/// night-differential grid are defined over.
pub fn minute_of_day(timestamp: NaiveDateTime) -> u32 {
    timestamp.hour() * 60 + timestamp.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// TOD-001: reference values
    #[test]
    fn test_parse_reference_values() {
        assert_eq!(parse_time_to_minutes("09:00").unwrap(), 540);
        assert_eq!(parse_time_to_minutes("18:00").unwrap(), 1080);
        assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_time_to_minutes("12:30").unwrap(), 750);
    }

    /// TOD-002: extremes of the valid domain
    #[test]
    fn test_parse_domain_extremes() {
        assert_eq!(parse_time_to_minutes("23:59").unwrap(), 1439);
        assert_eq!(parse_time_to_minutes("00:01").unwrap(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_separator() {
        let error = parse_time_to_minutes("0900").unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid time string '0900': expected HH:MM"
        );
    }

    #[test]
    fn test_parse_rejects_wrong_separator() {
        assert!(parse_time_to_minutes("09.00").is_err());
        assert!(parse_time_to_minutes("09-00").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_fields() {
        assert!(parse_time_to_minutes("aa:00").is_err());
        assert!(parse_time_to_minutes("09:bb").is_err());
        assert!(parse_time_to_minutes(":").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!(parse_time_to_minutes("24:00").is_err());
        assert!(parse_time_to_minutes("09:60").is_err());
    }

    #[test]
    fn test_parse_rejects_trailing_seconds() {
        // "09:00:00" splits into "09" and "00:00"; the minute field fails.
        assert!(parse_time_to_minutes("09:00:00").is_err());
    }

    #[test]
    fn test_minute_of_day_ignores_seconds() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 30, 59)
            .unwrap();
        assert_eq!(minute_of_day(timestamp), 570);
    }

    #[test]
    fn test_minute_of_day_at_midnight() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(minute_of_day(timestamp), 0);
    }
}
