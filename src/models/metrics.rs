//! Metrics models for single punches and aggregated periods.
//!
//! This module contains the [`PunchMetrics`] record produced when a punch is
//! closed, the [`PeriodAggregate`] produced by daily/weekly reduction, and
//! the [`MetricsTotals`] trait that lets the aggregator consume both with a
//! single implementation.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::WorkDuration;

/// The attendance metrics computed for a single completed punch.
///
/// Produced once, wholesale, when a punch-out is recorded; recomputed
/// wholesale after an administrative timestamp correction; never partially
/// mutated. Timestamps carry the employee's local wall-clock time and
/// serialize as ISO-8601.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{PunchMetrics, WorkDuration};
/// use chrono::NaiveDate;
///
/// let punch_in = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let punch_out = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(18, 0, 0).unwrap();
///
/// let metrics = PunchMetrics {
///     total_worked: WorkDuration::from_minutes(540),
///     regular: WorkDuration::from_minutes(540),
///     overtime: WorkDuration::ZERO,
///     night_differential: WorkDuration::ZERO,
///     late: WorkDuration::ZERO,
///     undertime: WorkDuration::ZERO,
///     punch_in,
///     punch_out,
/// };
/// assert_eq!(metrics.total_worked.hours, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchMetrics {
    /// Whole minutes between punch-in and punch-out.
    pub total_worked: WorkDuration,
    /// Worked time within scheduled bounds, net of lateness.
    pub regular: WorkDuration,
    /// Worked time beyond the scheduled duration.
    pub overtime: WorkDuration,
    /// Worked minutes falling inside the 22:00–06:00 window.
    pub night_differential: WorkDuration,
    /// Minutes of punch-in after the scheduled start.
    pub late: WorkDuration,
    /// Minutes of punch-out before the scheduled end (same calendar day only).
    pub undertime: WorkDuration,
    /// The punch-in timestamp, employee-local wall clock.
    pub punch_in: NaiveDateTime,
    /// The punch-out timestamp, employee-local wall clock.
    pub punch_out: NaiveDateTime,
}

/// Field-wise sums over a set of punch metrics or daily aggregates.
///
/// The same shape serves both granularities: punches reduce into a daily
/// aggregate, and daily aggregates reduce into a weekly one. For weekly
/// aggregation `punch_count` counts the days worked rather than punches.
/// Rebuilt wholesale whenever the underlying record set changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodAggregate {
    /// Summed worked time.
    pub total_worked: WorkDuration,
    /// Summed regular hours.
    pub regular: WorkDuration,
    /// Summed overtime.
    pub overtime: WorkDuration,
    /// Summed night differential.
    pub night_differential: WorkDuration,
    /// Summed lateness.
    pub late: WorkDuration,
    /// Summed undertime.
    pub undertime: WorkDuration,
    /// Number of records reduced into this aggregate.
    pub punch_count: usize,
}

/// Per-field minute totals extracted from a metrics-shaped record.
///
/// The intermediate currency of aggregation: every record type that can be
/// aggregated reports its six totals through [`MetricsTotals`], and the
/// aggregator sums these field-wise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinuteTotals {
    /// Total worked minutes.
    pub total_worked: u32,
    /// Regular minutes.
    pub regular: u32,
    /// Overtime minutes.
    pub overtime: u32,
    /// Night differential minutes.
    pub night_differential: u32,
    /// Late minutes.
    pub late: u32,
    /// Undertime minutes.
    pub undertime: u32,
}

/// Exposes the six per-field minute totals of a metrics-shaped record.
///
/// Implemented for [`PunchMetrics`] (daily aggregation from punches) and
/// [`PeriodAggregate`] (weekly aggregation from daily summaries), so that
/// [`aggregate_period`](crate::calculation::aggregate_period) is written
/// once and reused at both granularities.
pub trait MetricsTotals {
    /// Returns the record's minute totals for each of the six fields.
    fn minute_totals(&self) -> MinuteTotals;
}

impl MetricsTotals for PunchMetrics {
    fn minute_totals(&self) -> MinuteTotals {
        MinuteTotals {
            total_worked: self.total_worked.total_minutes,
            regular: self.regular.total_minutes,
            overtime: self.overtime.total_minutes,
            night_differential: self.night_differential.total_minutes,
            late: self.late.total_minutes,
            undertime: self.undertime.total_minutes,
        }
    }
}

impl MetricsTotals for PeriodAggregate {
    fn minute_totals(&self) -> MinuteTotals {
        MinuteTotals {
            total_worked: self.total_worked.total_minutes,
            regular: self.regular.total_minutes,
            overtime: self.overtime.total_minutes,
            night_differential: self.night_differential.total_minutes,
            late: self.late.total_minutes,
            undertime: self.undertime.total_minutes,
        }
    }
}
