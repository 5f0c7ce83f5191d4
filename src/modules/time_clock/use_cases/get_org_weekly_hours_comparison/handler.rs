use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::scheduling::core::schedule_week::ScheduleWeek;
use crate::modules::time_clock::core::reconciliation::{
    HoursComparisonRow, HoursComparisonTotals, compare_hours,
};
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursComparison {
    pub week_id: String,
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub employees: Vec<HoursComparisonRow>,
    pub totals: HoursComparisonTotals,
}

pub struct GetOrgWeeklyHoursComparisonHandler {
    ports: TimeClockPorts,
}

impl GetOrgWeeklyHoursComparisonHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    /// Compares the week `week_id`, or the week containing now.
    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        org_id: &str,
        week_id: Option<&str>,
    ) -> Result<HoursComparison, ApplicationError> {
        let week = self.find_week(org_id, week_id).await?;

        let shifts = self
            .ports
            .shifts
            .list_for_week(&week.id)
            .await
            .map_err(ApplicationError::unexpected)?;
        let entries = self
            .ports
            .queries
            .list_for_org_between(org_id, week.start_date, week.end_date)
            .await
            .map_err(ApplicationError::unexpected)?;

        let mut profiles = HashMap::new();
        let employee_ids = shifts
            .iter()
            .filter_map(|shift| shift.employee_id.as_deref())
            .chain(entries.iter().map(|entry| entry.employee_id.as_str()));
        for employee_id in employee_ids {
            if profiles.contains_key(employee_id) {
                continue;
            }
            let profile = self
                .ports
                .directory
                .find_user(org_id, employee_id)
                .await
                .map_err(ApplicationError::unexpected)?;
            if let Some(profile) = profile {
                profiles.insert(employee_id.to_string(), profile);
            }
        }

        let (employees, totals) = compare_hours(&shifts, &entries, &profiles);
        tracing::debug!(week_id = %week.id, employees = employees.len(), "hours comparison built");
        Ok(HoursComparison {
            week_id: week.id,
            week_start: week.start_date,
            week_end: week.end_date,
            employees,
            totals,
        })
    }

    async fn find_week(
        &self,
        org_id: &str,
        week_id: Option<&str>,
    ) -> Result<ScheduleWeek, ApplicationError> {
        let week = match week_id {
            Some(week_id) => self.ports.weeks.find(org_id, week_id).await,
            None => {
                self.ports
                    .weeks
                    .find_containing(org_id, self.ports.clock.now())
                    .await
            }
        };
        week.map_err(ApplicationError::unexpected)?
            .ok_or_else(|| ApplicationError::NotFound("Schedule week not found".to_string()))
    }
}
