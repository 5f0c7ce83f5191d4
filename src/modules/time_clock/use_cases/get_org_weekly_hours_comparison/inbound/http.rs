use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::get_org_weekly_hours_comparison::csv_export::hours_comparison_csv;
use crate::shell::actor::Manager;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct HoursComparisonParams {
    pub week_id: Option<String>,
    /// `csv` downloads the report instead of returning JSON.
    pub format: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Manager(actor): Manager,
    Query(params): Query<HoursComparisonParams>,
) -> Response {
    let report = match state
        .hours_comparison_handler
        .handle(&actor.org_id, params.week_id.as_deref())
        .await
    {
        Ok(report) => report,
        Err(error) => return error.into_response(),
    };

    if params.format.as_deref() != Some("csv") {
        return Json(report).into_response();
    }

    match hours_comparison_csv(&report.employees) {
        Ok(csv) => {
            let filename = format!(
                "attachment; filename=\"hours-comparison-{}.csv\"",
                report.week_start.format("%Y-%m-%d")
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (header::CONTENT_DISPOSITION, filename),
                ],
                csv,
            )
                .into_response()
        }
        Err(error) => ApplicationError::unexpected(error).into_response(),
    }
}
