use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::overtime::use_cases::get_weekly_summary::inbound::http as weekly_summary_http;
use crate::modules::time_clock::core::decision::ErrorKind;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_in::inbound::http as clock_in_http;
use crate::modules::time_clock::use_cases::clock_out::inbound::http as clock_out_http;
use crate::modules::time_clock::use_cases::get_clock_status::inbound::http as clock_status_http;
use crate::modules::time_clock::use_cases::get_my_weekly_hours::inbound::http as my_week_http;
use crate::modules::time_clock::use_cases::get_org_weekly_hours_comparison::inbound::http as comparison_http;
use crate::modules::time_clock::use_cases::list_pending_overtime_requests::inbound::http as pending_overtime_http;
use crate::modules::time_clock::use_cases::review_overtime_request::inbound::http as review_overtime_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/time-clock/status", get(clock_status_http::handle))
        .route("/api/v1/time-clock/clock-in", post(clock_in_http::handle))
        .route("/api/v1/time-clock/clock-out", post(clock_out_http::handle))
        .route("/api/v1/time-clock/my-week", get(my_week_http::handle))
        .route(
            "/api/v1/time-clock/overtime-requests",
            get(pending_overtime_http::handle),
        )
        .route(
            "/api/v1/time-clock/overtime-requests/{id}/approve",
            put(review_overtime_http::approve),
        )
        .route(
            "/api/v1/time-clock/overtime-requests/{id}/deny",
            put(review_overtime_http::deny),
        )
        .route(
            "/api/v1/analytics/hours-comparison",
            get(comparison_http::handle),
        )
        .route(
            "/api/v1/analytics/weekly-summary",
            get(weekly_summary_http::handle),
        )
        .with_state(state)
}

/// `{ "error": message }` with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

pub fn status_for(error: &ApplicationError) -> StatusCode {
    match error.kind() {
        Some(ErrorKind::NotFound) => StatusCode::NOT_FOUND,
        Some(ErrorKind::InvalidState | ErrorKind::CapacityExceeded) => StatusCode::CONFLICT,
        Some(ErrorKind::WindowViolation | ErrorKind::Validation) => StatusCode::BAD_REQUEST,
        None => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = status_for(&self);
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            return json_error(status, "Internal server error");
        }
        json_error(status, self.to_string())
    }
}
