use std::sync::Arc;

use serde::Serialize;

use crate::modules::overtime::core::summary::{ScheduleSummary, summarize_schedule};
use crate::modules::scheduling::core::schedule_week::{ScheduleState, ScheduleWeek};
use crate::modules::scheduling::ports::{
    OrganizationRepository, ScheduleWeekRepository, ShiftRepository,
};
use crate::modules::time_clock::core::reconciliation::late_clock_ins;
use crate::modules::time_clock::core::worked_time::{as_hours, worked_minutes};
use crate::modules::time_clock::ports::TimeEntryQueries;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::shared::core::primitives::Clock;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub schedule_week_id: String,
    pub schedule_week_state: ScheduleState,
    #[serde(flatten)]
    pub schedule: ScheduleSummary,
    /// Raw clock-in to clock-out time of completed entries.
    pub actual_worked_hours: f64,
    pub late_clock_ins: usize,
}

pub struct GetWeeklySummaryHandler {
    organizations: Arc<dyn OrganizationRepository>,
    weeks: Arc<dyn ScheduleWeekRepository>,
    shifts: Arc<dyn ShiftRepository>,
    entries: Arc<dyn TimeEntryQueries>,
    clock: Arc<dyn Clock>,
}

impl GetWeeklySummaryHandler {
    pub fn new(
        organizations: Arc<dyn OrganizationRepository>,
        weeks: Arc<dyn ScheduleWeekRepository>,
        shifts: Arc<dyn ShiftRepository>,
        entries: Arc<dyn TimeEntryQueries>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            organizations,
            weeks,
            shifts,
            entries,
            clock,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        org_id: &str,
        week_id: Option<&str>,
    ) -> Result<WeeklySummary, ApplicationError> {
        let week = self.find_week(org_id, week_id).await?;
        let policy = self
            .organizations
            .find_policy(org_id)
            .await
            .map_err(ApplicationError::unexpected)?
            .ok_or_else(|| ApplicationError::NotFound("Organization not found".to_string()))?;

        let shifts = self
            .shifts
            .list_for_week(&week.id)
            .await
            .map_err(ApplicationError::unexpected)?;
        let entries = self
            .entries
            .list_for_org_between(org_id, week.start_date, week.end_date)
            .await
            .map_err(ApplicationError::unexpected)?;

        let worked: i64 = entries
            .iter()
            .filter_map(|entry| {
                entry
                    .clock_out_at
                    .map(|clock_out_at| worked_minutes(entry.clock_in_at, clock_out_at))
            })
            .sum();

        Ok(WeeklySummary {
            schedule_week_id: week.id,
            schedule_week_state: week.state,
            schedule: summarize_schedule(&shifts, &policy),
            actual_worked_hours: as_hours(worked),
            late_clock_ins: late_clock_ins(&entries),
        })
    }

    async fn find_week(
        &self,
        org_id: &str,
        week_id: Option<&str>,
    ) -> Result<ScheduleWeek, ApplicationError> {
        let week = match week_id {
            Some(week_id) => self.weeks.find(org_id, week_id).await,
            None => self.weeks.find_containing(org_id, self.clock.now()).await,
        };
        week.map_err(ApplicationError::unexpected)?
            .ok_or_else(|| ApplicationError::NotFound("Schedule week not found".to_string()))
    }
}
