use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::shell::actor::Actor;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct MyWeekParams {
    pub week_start: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    Query(params): Query<MyWeekParams>,
) -> Response {
    match state
        .my_weekly_hours_handler
        .handle(&actor.org_id, &actor.user_id, params.week_start.as_deref())
        .await
    {
        Ok(report) => Json(report).into_response(),
        Err(error) => error.into_response(),
    }
}
