use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::time_clock::use_cases::clock_out::command::ClockOut;
use crate::shell::actor::Actor;
use crate::shell::http::json_error;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ClockOutBody {
    pub time_entry_id: Option<String>,
    pub shift_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    actor: Actor,
    body: Result<Json<ClockOutBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            return json_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text());
        }
    };

    let command = ClockOut {
        org_id: actor.org_id,
        employee_id: actor.user_id,
        time_entry_id: body.time_entry_id,
        shift_id: body.shift_id,
    };

    match state.clock_out_handler.handle(command).await {
        Ok(outcome) => Json(outcome).into_response(),
        Err(error) => error.into_response(),
    }
}
