//! Request types for the attendance metrics API.
//!
//! This module defines the JSON request structures for the `/metrics` and
//! `/aggregate` endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{MetricsTotals, MinuteTotals, Schedule, WorkDuration};

/// Request body for the `/metrics` endpoint.
///
/// Sent by the punch-out handler when a punch closes and by the admin-edit
/// handler after a manual timestamp correction. Timestamps are ISO-8601 in
/// the employee's local time; when `schedule` is omitted the configured
/// default schedule applies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRequest {
    /// The punch-in timestamp.
    pub punch_in: NaiveDateTime,
    /// The punch-out timestamp.
    pub punch_out: NaiveDateTime,
    /// The employee's schedule; falls back to the configured default.
    #[serde(default)]
    pub schedule: Option<ScheduleRequest>,
}

/// Schedule information in a metrics request, as `HH:MM` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Scheduled start time, 24-hour `HH:MM`.
    pub start: String,
    /// Scheduled end time, 24-hour `HH:MM`.
    pub end: String,
}

impl TryFrom<ScheduleRequest> for Schedule {
    type Error = EngineError;

    fn try_from(req: ScheduleRequest) -> Result<Self, Self::Error> {
        Schedule::parse(&req.start, &req.end)
    }
}

/// Request body for the `/aggregate` endpoint.
///
/// Sent by daily-aggregate recomputation after a punch set changes, and by
/// period-reporting jobs composing daily aggregates into weekly totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRequest {
    /// The metrics-shaped records to reduce.
    pub records: Vec<MetricsRecordRequest>,
}

/// One metrics-shaped record in an aggregate request.
///
/// Aggregate consumers routinely submit partially populated or legacy-shaped
/// records, so every field is optional and an absent duration counts as
/// zero. Unknown fields (timestamps, `punchCount` on a daily aggregate fed
/// back for weekly reduction) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsRecordRequest {
    /// Total worked duration, if present.
    #[serde(default)]
    pub total_worked: Option<WorkDuration>,
    /// Regular-hours duration, if present.
    #[serde(default)]
    pub regular: Option<WorkDuration>,
    /// Overtime duration, if present.
    #[serde(default)]
    pub overtime: Option<WorkDuration>,
    /// Night-differential duration, if present.
    #[serde(default)]
    pub night_differential: Option<WorkDuration>,
    /// Lateness duration, if present.
    #[serde(default)]
    pub late: Option<WorkDuration>,
    /// Undertime duration, if present.
    #[serde(default)]
    pub undertime: Option<WorkDuration>,
}

impl MetricsTotals for MetricsRecordRequest {
    fn minute_totals(&self) -> MinuteTotals {
        let minutes = |d: &Option<WorkDuration>| d.map(|d| d.total_minutes).unwrap_or(0);
        MinuteTotals {
            total_worked: minutes(&self.total_worked),
            regular: minutes(&self.regular),
            overtime: minutes(&self.overtime),
            night_differential: minutes(&self.night_differential),
            late: minutes(&self.late),
            undertime: minutes(&self.undertime),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_metrics_request() {
        let json = r#"{
            "punchIn": "2024-01-15T09:00:00",
            "punchOut": "2024-01-15T18:00:00",
            "schedule": { "start": "09:00", "end": "18:00" }
        }"#;

        let request: MetricsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.punch_in.to_string(), "2024-01-15 09:00:00");
        assert_eq!(request.schedule.as_ref().unwrap().start, "09:00");
    }

    #[test]
    fn test_deserialize_metrics_request_without_schedule() {
        let json = r#"{
            "punchIn": "2024-01-15T09:00:00",
            "punchOut": "2024-01-15T18:00:00"
        }"#;

        let request: MetricsRequest = serde_json::from_str(json).unwrap();
        assert!(request.schedule.is_none());
    }

    #[test]
    fn test_schedule_conversion() {
        let req = ScheduleRequest {
            start: "09:00".to_string(),
            end: "18:00".to_string(),
        };
        let schedule: Schedule = req.try_into().unwrap();
        assert_eq!(schedule.start, 540);
        assert_eq!(schedule.end, 1080);
    }

    #[test]
    fn test_schedule_conversion_propagates_format_error() {
        let req = ScheduleRequest {
            start: "9am".to_string(),
            end: "18:00".to_string(),
        };
        let result: Result<Schedule, _> = req.try_into();
        assert!(matches!(
            result.unwrap_err(),
            EngineError::InvalidTimeFormat { .. }
        ));
    }

    #[test]
    fn test_deserialize_aggregate_request() {
        let json = r#"{
            "records": [
                {
                    "totalWorked": { "hours": 4, "minutes": 0, "totalMinutes": 240 },
                    "regular": { "hours": 4, "minutes": 0, "totalMinutes": 240 },
                    "overtime": { "hours": 0, "minutes": 0, "totalMinutes": 0 },
                    "nightDifferential": { "hours": 0, "minutes": 0, "totalMinutes": 0 },
                    "late": { "hours": 0, "minutes": 30, "totalMinutes": 30 },
                    "undertime": { "hours": 0, "minutes": 0, "totalMinutes": 0 }
                }
            ]
        }"#;

        let request: AggregateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records.len(), 1);
        assert_eq!(request.records[0].minute_totals().total_worked, 240);
        assert_eq!(request.records[0].minute_totals().late, 30);
    }

    #[test]
    fn test_legacy_shaped_record_counts_missing_fields_as_zero() {
        let json = r#"{
            "records": [
                { "totalWorked": { "hours": 2, "minutes": 0, "totalMinutes": 120 } }
            ]
        }"#;

        let request: AggregateRequest = serde_json::from_str(json).unwrap();
        let totals = request.records[0].minute_totals();
        assert_eq!(totals.total_worked, 120);
        assert_eq!(totals.regular, 0);
        assert_eq!(totals.night_differential, 0);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        // A daily aggregate fed back for weekly reduction carries punchCount
        // and timestamps; both are ignored.
        let json = r#"{
            "records": [
                {
                    "totalWorked": { "hours": 8, "minutes": 0, "totalMinutes": 480 },
                    "punchCount": 2,
                    "punchIn": "2024-01-15T09:00:00"
                }
            ]
        }"#;

        let request: AggregateRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.records[0].minute_totals().total_worked, 480);
    }
}
