//! Error types for the attendance metrics engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during metrics calculation.

use chrono::NaiveDateTime;
use thiserror::Error;

/// The main error type for the attendance metrics engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::InvalidTimeFormat {
///     value: "9am".to_string(),
///     message: "expected HH:MM".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid time string '9am': expected HH:MM");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A schedule time string was not a valid `HH:MM` value.
    #[error("Invalid time string '{value}': {message}")]
    InvalidTimeFormat {
        /// The string that failed to parse.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A punch-out timestamp preceded its punch-in timestamp.
    #[error("Punch out {punch_out} is earlier than punch in {punch_in}")]
    NegativeDuration {
        /// The punch-in timestamp.
        punch_in: NaiveDateTime,
        /// The offending punch-out timestamp.
        punch_out: NaiveDateTime,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .unwrap()
            .and_time(chrono::NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap())
    }

    #[test]
    fn test_invalid_time_format_displays_value_and_message() {
        let error = EngineError::InvalidTimeFormat {
            value: "25:00".to_string(),
            message: "hour out of range 0-23".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid time string '25:00': hour out of range 0-23"
        );
    }

    #[test]
    fn test_negative_duration_displays_both_timestamps() {
        let error = EngineError::NegativeDuration {
            punch_in: make_datetime("2024-01-15", "18:00:00"),
            punch_out: make_datetime("2024-01-15", "09:00:00"),
        };
        assert_eq!(
            error.to_string(),
            "Punch out 2024-01-15 09:00:00 is earlier than punch in 2024-01-15 18:00:00"
        );
    }

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/engine.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/engine.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_time() -> EngineResult<()> {
            Err(EngineError::InvalidTimeFormat {
                value: "bad".to_string(),
                message: "expected HH:MM".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_time()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
