use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::time_clock::use_cases::clock_in::command::ClockIn;
use crate::shell::actor::Actor;
use crate::shell::http::json_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ClockInBody {
    pub shift_id: Option<String>,
    #[serde(default)]
    pub force: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<ClockInBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return json_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = ClockIn {
        time_entry_id: Uuid::now_v7().to_string(),
        org_id: actor.org_id,
        employee_id: actor.user_id,
        shift_id: body.shift_id,
        force: body.force,
    };

    match state.clock_in_handler.handle(command).await {
        Ok(entry) => (StatusCode::CREATED, Json(entry)).into_response(),
        Err(error) => error.into_response(),
    }
}
