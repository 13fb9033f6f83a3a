//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Schedule;

use super::types::EngineSettings;

/// Loads and provides access to engine settings.
///
/// The `ConfigLoader` reads a YAML settings file and validates it eagerly,
/// so an invalid default schedule fails at startup rather than on the first
/// request.
///
/// # File Structure
///
/// ```text
/// config/engine.yaml:
///
/// default_schedule:
///   start: "09:00"
///   end: "18:00"
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
/// assert_eq!(loader.default_schedule().start, 540);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: EngineSettings,
    default_schedule: Schedule,
}

impl ConfigLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it contains invalid YAML
    /// or an invalid default schedule.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let settings: EngineSettings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let default_schedule = Schedule::parse(
            &settings.default_schedule.start,
            &settings.default_schedule.end,
        )
        .map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })?;

        Ok(Self {
            settings,
            default_schedule,
        })
    }

    /// Returns the raw settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the validated default schedule.
    pub fn default_schedule(&self) -> Schedule {
        self.default_schedule
    }
}
