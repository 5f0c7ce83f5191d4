use async_graphql::{Context, Enum, ID, Object, Result as GqlResult};

use crate::modules::time_clock::adapters::inbound::graphql::{GqlTimeEntry, gql_error, manager};
use crate::modules::time_clock::use_cases::review_overtime_request::command::{
    OvertimeDecision, ReviewOvertimeRequest,
};
use crate::shell::state::AppState;

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
pub enum GqlOvertimeDecision {
    Approve,
    Deny,
}

impl From<GqlOvertimeDecision> for OvertimeDecision {
    fn from(decision: GqlOvertimeDecision) -> Self {
        match decision {
            GqlOvertimeDecision::Approve => OvertimeDecision::Approve,
            GqlOvertimeDecision::Deny => OvertimeDecision::Deny,
        }
    }
}

#[derive(Default)]
pub struct ReviewOvertimeMutation;

#[Object]
impl ReviewOvertimeMutation {
    async fn review_overtime_request(
        &self,
        context: &Context<'_>,
        time_entry_id: ID,
        decision: GqlOvertimeDecision,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let actor = manager(context)?;

        let command = ReviewOvertimeRequest {
            org_id: actor.org_id.clone(),
            time_entry_id: time_entry_id.to_string(),
            decision: decision.into(),
            reviewed_by: actor.user_id.clone(),
        };

        let entry = state
            .review_overtime_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(entry.into())
    }
}
