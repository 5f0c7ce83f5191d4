use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_clock::adapters::inbound::graphql::{GqlTimeEntry, actor, gql_error};
use crate::modules::time_clock::use_cases::clock_out::command::ClockOut;
use crate::modules::time_clock::use_cases::clock_out::handler::ClockOutOutcome;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlClockOutOutcome {
    pub entry: GqlTimeEntry,
    pub worked_minutes: i64,
    pub worked_hours: f64,
    pub needs_overtime_approval: bool,
}

impl From<ClockOutOutcome> for GqlClockOutOutcome {
    fn from(v: ClockOutOutcome) -> Self {
        Self {
            entry: v.entry.into(),
            worked_minutes: v.worked_minutes,
            worked_hours: v.worked_hours,
            needs_overtime_approval: v.needs_overtime_approval,
        }
    }
}

#[derive(Default)]
pub struct ClockOutMutation;

#[Object]
impl ClockOutMutation {
    /// Closes the entry `time_entry_id`, the open entry of `shift_id`, or the latest open entry.
    async fn clock_out(
        &self,
        context: &Context<'_>,
        time_entry_id: Option<String>,
        shift_id: Option<String>,
    ) -> GqlResult<GqlClockOutOutcome> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;

        let command = ClockOut {
            org_id: actor.org_id.clone(),
            employee_id: actor.user_id.clone(),
            time_entry_id,
            shift_id,
        };

        let outcome = state
            .clock_out_handler
            .handle(command)
            .await
            .map_err(gql_error)?;
        Ok(outcome.into())
    }
}
