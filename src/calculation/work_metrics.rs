//! Per-punch work metrics calculation.
//!
//! This module contains the central calculation of the engine: one punch-in /
//! punch-out pair plus a schedule in, one complete [`PunchMetrics`] record
//! out. Callers invoke it when a punch is closed and again, wholesale, after
//! an administrative timestamp correction.

use chrono::NaiveDateTime;

use crate::error::{EngineError, EngineResult};
use crate::models::{PunchMetrics, Schedule, WorkDuration};

use super::night_differential::night_differential_minutes;
use super::time_of_day::minute_of_day;

/// Computes the six attendance metrics for a single punch.
///
/// Timestamps carry the employee's local wall-clock time; the engine never
/// consults an ambient time zone. Rules:
///
/// - `total_worked`: whole minutes between the punches, rounded down.
/// - `late`: minutes of punch-in after the scheduled start, clamped at zero.
/// - `undertime`: minutes of punch-out before the scheduled end, registered
///   only when the punch-out falls on the punch-in's calendar date. Shifts
///   that cross midnight never register undertime.
/// - `regular`: worked time capped at the scheduled span, net of lateness,
///   clamped at zero.
/// - `overtime`: worked time beyond the scheduled span, clamped at zero.
/// - `night_differential`: worked minutes inside the 22:00–06:00 window,
///   independent of the schedule.
///
/// The scheduled span is a plain `end - start` subtraction, negative for
/// overnight schedules; regular/overtime math clamps rather than wrapping
/// it around midnight.
///
/// # Errors
///
/// Returns [`EngineError::NegativeDuration`] when `punch_out` precedes
/// `punch_in`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::calculate_work_metrics;
/// use attendance_engine::models::Schedule;
/// use chrono::NaiveDate;
///
/// let schedule = Schedule::parse("09:00", "18:00").unwrap();
/// let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let metrics = calculate_work_metrics(
///     day.and_hms_opt(9, 30, 0).unwrap(),
///     day.and_hms_opt(18, 0, 0).unwrap(),
///     &schedule,
/// )
/// .unwrap();
///
/// assert_eq!(metrics.late.total_minutes, 30);
/// assert_eq!(metrics.regular.hours, 8);
/// ```
pub fn calculate_work_metrics(
    punch_in: NaiveDateTime,
    punch_out: NaiveDateTime,
    schedule: &Schedule,
) -> EngineResult<PunchMetrics> {
    if punch_out < punch_in {
        return Err(EngineError::NegativeDuration {
            punch_in,
            punch_out,
        });
    }

    let total_worked = (punch_out - punch_in).num_minutes();
    let scheduled = schedule.scheduled_minutes();

    let punch_in_minute = i64::from(minute_of_day(punch_in));
    let punch_out_minute = i64::from(minute_of_day(punch_out));

    let late = (punch_in_minute - i64::from(schedule.start)).max(0);

    let same_calendar_day = punch_out.date() == punch_in.date();
    let undertime = if same_calendar_day && punch_out_minute < i64::from(schedule.end) {
        i64::from(schedule.end) - punch_out_minute
    } else {
        0
    };

    let regular = (total_worked.min(scheduled) - late).max(0);
    let overtime = (total_worked - scheduled).max(0);

    Ok(PunchMetrics {
        total_worked: WorkDuration::from_minutes(total_worked as u32),
        regular: WorkDuration::from_minutes(regular as u32),
        overtime: WorkDuration::from_minutes(overtime as u32),
        night_differential: WorkDuration::from_minutes(night_differential_minutes(
            punch_in, punch_out,
        )),
        late: WorkDuration::from_minutes(late as u32),
        undertime: WorkDuration::from_minutes(undertime as u32),
        punch_in,
        punch_out,
    })
}
