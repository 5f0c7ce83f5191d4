use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::actor::Actor;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, actor: Actor) -> Response {
    match state
        .clock_status_handler
        .handle(&actor.org_id, &actor.user_id)
        .await
    {
        Ok(status) => Json(status).into_response(),
        Err(error) => error.into_response(),
    }
}
