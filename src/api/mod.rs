//! HTTP API module for the attendance metrics engine.
//!
//! This module provides the REST endpoints through which punch-out handlers,
//! admin-edit handlers and reporting jobs invoke the engine. It contains no
//! calculation logic of its own.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AggregateRequest, MetricsRecordRequest, MetricsRequest, ScheduleRequest};
pub use response::ApiError;
pub use state::AppState;
