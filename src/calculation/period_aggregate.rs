//! Period aggregation.
//!
//! This module reduces a collection of metrics-shaped records into a single
//! [`PeriodAggregate`]. One function serves both granularities: per-punch
//! metrics reduce into a daily aggregate, and daily aggregates reduce into a
//! weekly one.

use crate::models::{MetricsTotals, MinuteTotals, PeriodAggregate, WorkDuration};

/// Sums the six duration fields across `records` and counts them.
///
/// Input order is irrelevant. An empty collection yields all-zero durations
/// and a zero count. The surrounding persistence layer calls this wholesale
/// whenever a day's punch set changes (create, edit, delete), and reporting
/// jobs call it again over daily aggregates to build weekly totals.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate_period;
/// use attendance_engine::models::PunchMetrics;
///
/// let aggregate = aggregate_period::<PunchMetrics>(&[]);
/// assert_eq!(aggregate.punch_count, 0);
/// assert_eq!(aggregate.total_worked.total_minutes, 0);
/// ```
pub fn aggregate_period<T: MetricsTotals>(records: &[T]) -> PeriodAggregate {
    let mut sums = MinuteTotals::default();
    for record in records {
        let totals = record.minute_totals();
        sums.total_worked += totals.total_worked;
        sums.regular += totals.regular;
        sums.overtime += totals.overtime;
        sums.night_differential += totals.night_differential;
        sums.late += totals.late;
        sums.undertime += totals.undertime;
    }

    PeriodAggregate {
        total_worked: WorkDuration::from_minutes(sums.total_worked),
        regular: WorkDuration::from_minutes(sums.regular),
        overtime: WorkDuration::from_minutes(sums.overtime),
        night_differential: WorkDuration::from_minutes(sums.night_differential),
        late: WorkDuration::from_minutes(sums.late),
        undertime: WorkDuration::from_minutes(sums.undertime),
        punch_count: records.len(),
    }
}
