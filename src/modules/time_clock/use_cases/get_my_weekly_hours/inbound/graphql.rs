use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::time_clock::adapters::inbound::graphql::{GqlTimeEntry, actor, gql_error};
use crate::modules::time_clock::use_cases::get_my_weekly_hours::handler::WeeklyHours;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWeeklyHours {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub scheduled_hours: f64,
    pub actual_hours: f64,
    pub difference_hours: f64,
    pub late_clock_ins: u32,
    pub entries: Vec<GqlTimeEntry>,
}

impl From<WeeklyHours> for GqlWeeklyHours {
    fn from(v: WeeklyHours) -> Self {
        Self {
            week_start: v.week_start,
            week_end: v.week_end,
            scheduled_hours: v.scheduled_hours,
            actual_hours: v.actual_hours,
            difference_hours: v.difference_hours,
            late_clock_ins: u32::try_from(v.late_clock_ins).unwrap_or(u32::MAX),
            entries: v.entries.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct MyWeeklyHoursQuery;

#[Object]
impl MyWeeklyHoursQuery {
    /// `week_start` is a date (`2025-03-09`) or an RFC 3339 instant.
    async fn my_weekly_hours(
        &self,
        context: &Context<'_>,
        week_start: Option<String>,
    ) -> GqlResult<GqlWeeklyHours> {
        let state = context.data_unchecked::<AppState>();
        let actor = actor(context)?;
        let report = state
            .my_weekly_hours_handler
            .handle(&actor.org_id, &actor.user_id, week_start.as_deref())
            .await
            .map_err(gql_error)?;
        Ok(report.into())
    }
}
