//! Calculation logic for the attendance metrics engine.
//!
//! This module contains all the calculation functions for turning punch
//! timestamps into metrics, including time-of-day parsing, minute-granular
//! night-differential accounting, the central per-punch metrics calculation,
//! and the period aggregation reused for daily and weekly totals.

mod night_differential;
mod period_aggregate;
mod time_of_day;
mod work_metrics;

pub use night_differential::{
    NIGHT_END_MINUTE, NIGHT_START_MINUTE, night_differential_minutes,
};
pub use period_aggregate::aggregate_period;
pub use time_of_day::{MINUTES_PER_DAY, minute_of_day, parse_time_to_minutes};
pub use work_metrics::calculate_work_metrics;
