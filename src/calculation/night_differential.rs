//! Night-differential accounting.
//!
//! This module counts the worked minutes that fall inside the nocturnal
//! window, 22:00 to 06:00. A minute belongs to the window based on the
//! wall-clock hour of its starting instant; sub-minute splits never occur.
//! The count is schedule-independent.

use chrono::NaiveDateTime;

use super::time_of_day::{MINUTES_PER_DAY, minute_of_day};

/// Start of the nocturnal window (22:00), minutes since midnight.
pub const NIGHT_START_MINUTE: u32 = 22 * 60;

/// End of the nocturnal window (06:00, exclusive), minutes since midnight.
pub const NIGHT_END_MINUTE: u32 = 6 * 60;

/// Length of one nightly window in minutes (22:00 through 06:00).
const NIGHT_WINDOW_MINUTES: i64 = (MINUTES_PER_DAY - NIGHT_START_MINUTE + NIGHT_END_MINUTE) as i64;

/// Counts the worked minutes of `[punch_in, punch_out)` that fall inside the
/// nocturnal window.
///
/// The minute grid is anchored at `punch_in`: minute `k` starts at
/// `punch_in + k * 60s` and counts when that instant's hour is ≥ 22 or < 6.
/// A minute that begins inside the interval counts even when the punch-out
/// cuts it short.
///
/// Computed in closed form as the overlap of the punched minute range with
/// each nightly window the interval spans, so the cost is proportional to
/// the number of days spanned rather than the number of minutes worked.
///
/// Returns 0 when `punch_out <= punch_in`.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::night_differential_minutes;
/// use chrono::NaiveDate;
///
/// // A 22:00 to 06:00 shift sits entirely inside the window.
/// let punch_in = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(22, 0, 0).unwrap();
/// let punch_out = NaiveDate::from_ymd_opt(2024, 1, 16).unwrap().and_hms_opt(6, 0, 0).unwrap();
/// assert_eq!(night_differential_minutes(punch_in, punch_out), 480);
/// ```
pub fn night_differential_minutes(punch_in: NaiveDateTime, punch_out: NaiveDateTime) -> u32 {
    if punch_out <= punch_in {
        return 0;
    }

    let span_seconds = (punch_out - punch_in).num_seconds();
    // Minutes that begin within the interval: a started minute counts.
    let spanned_minutes = (span_seconds as u64).div_ceil(60) as i64;

    // Unwrap the minute grid onto a single axis starting at the punch-in
    // day's midnight. Minute k of the punch occupies position first + k, and
    // the nightly windows sit at [1320 + 1440d, 1800 + 1440d).
    let first = i64::from(minute_of_day(punch_in));
    let last = first + spanned_minutes;
    let day_minutes = i64::from(MINUTES_PER_DAY);
    let night_start = i64::from(NIGHT_START_MINUTE);

    let mut night = 0;
    let mut day = (first - (night_start + NIGHT_WINDOW_MINUTES)).div_euclid(day_minutes);
    loop {
        let window_start = night_start + day_minutes * day;
        let window_end = window_start + NIGHT_WINDOW_MINUTES;
        if window_start >= last {
            break;
        }
        night += (last.min(window_end) - first.max(window_start)).max(0);
        day += 1;
    }

    night as u32
}
