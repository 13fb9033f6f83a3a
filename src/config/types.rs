//! Configuration types for the attendance metrics engine.
//!
//! This module contains the strongly-typed settings structures that are
//! deserialized from the YAML settings file.

use serde::Deserialize;

/// A schedule expressed as `HH:MM` strings, as stored in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleTimes {
    /// Scheduled start time, 24-hour `HH:MM`.
    pub start: String,
    /// Scheduled end time, 24-hour `HH:MM`.
    pub end: String,
}

/// The engine settings loaded from YAML.
///
/// The default schedule is applied by entry points when a punch arrives
/// without an employee schedule attached.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Fallback schedule for employees without one of their own.
    pub default_schedule: ScheduleTimes,
}
