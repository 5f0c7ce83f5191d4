use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::actor::Manager;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct WeeklySummaryParams {
    pub week_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Manager(actor): Manager,
    Query(params): Query<WeeklySummaryParams>,
) -> Response {
    match state
        .weekly_summary_handler
        .handle(&actor.org_id, params.week_id.as_deref())
        .await
    {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error.into_response(),
    }
}
