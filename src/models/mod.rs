//! Core data models for the attendance metrics engine.
//!
//! This module contains all the domain models used throughout the engine.

mod duration;
mod metrics;
mod schedule;

pub use duration::{WorkDuration, format_duration};
pub use metrics::{MetricsTotals, MinuteTotals, PeriodAggregate, PunchMetrics};
pub use schedule::Schedule;
