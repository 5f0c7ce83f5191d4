use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::time_clock::adapters::inbound::graphql::{GqlTimeEntry, actor, gql_error};
use crate::modules::time_clock::use_cases::get_clock_status::handler::ClockStatus;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlEligibleShift {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub can_clock_in: bool,
}

#[derive(SimpleObject, Clone)]
pub struct GqlClockStatus {
    pub clock_in_early_allowance_minutes: u32,
    pub timezone: String,
    pub active_entry: Option<GqlTimeEntry>,
    pub eligible_shift: Option<GqlEligibleShift>,
    pub earliest_clock_in_at: Option<DateTime<Utc>>,
}

impl From<ClockStatus> for GqlClockStatus {
    fn from(v: ClockStatus) -> Self {
        Self {
            clock_in_early_allowance_minutes: v.policy.clock_in_early_allowance_minutes,
            timezone: v.policy.timezone,
            active_entry: v.active_entry.map(Into::into),
            eligible_shift: v.eligible_shift.map(|shift| GqlEligibleShift {
                id: shift.id,
                start_time: shift.start_time,
                end_time: shift.end_time,
                can_clock_in: shift.can_clock_in,
            }),
            earliest_clock_in_at: v.earliest_clock_in_at,
        }
    }
}

#[derive(Default)]
pub struct ClockStatusQuery;

#[Object]
impl ClockStatusQuery {
    async fn clock_status(&self, context: &Context<'_>) -> GqlResult<GqlClockStatus> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;
        let status = state
            .clock_status_handler
            .handle(&actor.org_id, &actor.user_id)
            .await
            .map_err(gql_error)?;
        Ok(status.into())
    }
}
