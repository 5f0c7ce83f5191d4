use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::time_clock::use_cases::review_overtime_request::command::{
    OvertimeDecision, ReviewOvertimeRequest,
};
use crate::shell::actor::{Actor, Manager};
use crate::shell::state::AppState;

pub async fn approve(
    State(state): State<AppState>,
    Manager(actor): Manager,
    Path(time_entry_id): Path<String>,
) -> Response {
    review(state, actor, time_entry_id, OvertimeDecision::Approve).await
}

pub async fn deny(
    State(state): State<AppState>,
    Manager(actor): Manager,
    Path(time_entry_id): Path<String>,
) -> Response {
    review(state, actor, time_entry_id, OvertimeDecision::Deny).await
}

async fn review(
    state: AppState,
    actor: Actor,
    time_entry_id: String,
    decision: OvertimeDecision,
) -> Response {
    let command = ReviewOvertimeRequest {
        org_id: actor.org_id,
        time_entry_id,
        decision,
        reviewed_by: actor.user_id,
    };
    match state.review_overtime_handler.handle(command).await {
        Ok(entry) => Json(entry).into_response(),
        Err(error) => error.into_response(),
    }
}
