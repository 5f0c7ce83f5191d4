use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::shell::actor::Manager;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Manager(actor): Manager) -> Response {
    match state.pending_overtime_handler.handle(&actor.org_id).await {
        Ok(requests) => Json(requests).into_response(),
        Err(error) => error.into_response(),
    }
}
