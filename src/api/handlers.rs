//! HTTP request handlers for the attendance metrics API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_period, calculate_work_metrics};
use crate::models::Schedule;

use super::request::{AggregateRequest, MetricsRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/metrics", post(metrics_handler))
        .route("/aggregate", post(aggregate_handler))
        .with_state(state)
}

/// Maps a JSON extraction rejection to an API error body.
fn json_rejection_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /metrics.
///
/// Computes the per-punch metrics record for a closed punch. Invoked by the
/// punch-out handler when a punch completes and by the admin-edit handler
/// after a timestamp correction.
async fn metrics_handler(
    State(state): State<AppState>,
    payload: Result<Json<MetricsRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing metrics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Resolve the schedule: the request's own, or the configured default.
    let schedule = match request.schedule {
        Some(req) => match Schedule::try_from(req) {
            Ok(schedule) => schedule,
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    error = %err,
                    "Invalid schedule in request"
                );
                let api_error: ApiErrorResponse = err.into();
                return api_error.into_response();
            }
        },
        None => state.default_schedule(),
    };

    match calculate_work_metrics(request.punch_in, request.punch_out, &schedule) {
        Ok(metrics) => {
            info!(
                correlation_id = %correlation_id,
                total_worked_minutes = metrics.total_worked.total_minutes,
                night_differential_minutes = metrics.night_differential.total_minutes,
                late_minutes = metrics.late.total_minutes,
                "Metrics calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(metrics),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Metrics calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for POST /aggregate.
///
/// Reduces a collection of metrics-shaped records into a period aggregate.
/// Serves both daily aggregation over punches and weekly aggregation over
/// daily summaries.
async fn aggregate_handler(
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing aggregate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = json_rejection_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let aggregate = aggregate_period(&request.records);
    info!(
        correlation_id = %correlation_id,
        punch_count = aggregate.punch_count,
        total_worked_minutes = aggregate.total_worked.total_minutes,
        "Aggregation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(aggregate),
    )
        .into_response()
}
