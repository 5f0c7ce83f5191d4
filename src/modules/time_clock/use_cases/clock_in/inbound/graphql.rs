use async_graphql::{Context, Object, Result as GqlResult};
use uuid::Uuid;

use crate::modules::time_clock::adapters::inbound::graphql::{GqlTimeEntry, actor, gql_error};
use crate::modules::time_clock::use_cases::clock_in::command::ClockIn;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ClockInMutation;

#[Object]
impl ClockInMutation {
    async fn clock_in(
        &self,
        context: &Context<'_>,
        shift_id: Option<String>,
        force: Option<bool>,
    ) -> GqlResult<GqlTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;

        let command = ClockIn {
            time_entry_id: Uuid::now_v7().to_string(),
            org_id: actor.org_id.clone(),
            employee_id: actor.user_id.clone(),
            shift_id,
            force: force.unwrap_or(false),
        };

        let entry = state
            .clock_in_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(entry.into())
    }
}
