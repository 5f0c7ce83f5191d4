use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::modules::time_clock::core::reconciliation::{
    late_clock_ins, total_actual_minutes, total_scheduled_minutes,
};
use crate::modules::time_clock::core::state::TimeEntry;
use crate::modules::time_clock::core::worked_time::as_hours;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_stream::load_policy;
use crate::shared::core::timezone::{local_date, start_of_week, week_bounds};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyHours {
    pub week_start: DateTime<Utc>,
    pub week_end: DateTime<Utc>,
    pub scheduled_hours: f64,
    pub actual_hours: f64,
    pub difference_hours: f64,
    pub late_clock_ins: usize,
    pub entries: Vec<TimeEntry>,
}

/// Accepts a calendar date (`2025-03-09`) or an RFC 3339 instant, read in the
/// organization's zone.
pub fn parse_week_start(raw: &str, zone: Tz) -> Result<NaiveDate, ApplicationError> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|instant| local_date(instant.with_timezone(&Utc), zone))
        .map_err(|_| ApplicationError::Validation("Invalid weekStart value".to_string()))
}

pub struct GetMyWeeklyHoursHandler {
    ports: TimeClockPorts,
}

impl GetMyWeeklyHoursHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    /// Seven local days from `week_start`, or from the Sunday of the current week.
    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        org_id: &str,
        employee_id: &str,
        week_start: Option<&str>,
    ) -> Result<WeeklyHours, ApplicationError> {
        let policy = load_policy(&self.ports, org_id).await?;
        let zone = policy.zone();
        let first_day = match week_start {
            Some(raw) => parse_week_start(raw, zone)?,
            None => start_of_week(self.ports.clock.now(), zone),
        };
        let (from, to) = week_bounds(first_day, zone);

        let entries = self
            .ports
            .queries
            .list_for_employee_between(org_id, employee_id, from, to)
            .await
            .map_err(ApplicationError::unexpected)?;
        let shifts = self
            .ports
            .shifts
            .list_starting_between_for_employee(org_id, employee_id, from, to)
            .await
            .map_err(ApplicationError::unexpected)?;

        let actual = total_actual_minutes(&entries);
        let scheduled = total_scheduled_minutes(&shifts);
        Ok(WeeklyHours {
            week_start: from,
            week_end: to,
            scheduled_hours: as_hours(scheduled),
            actual_hours: as_hours(actual),
            difference_hours: as_hours(actual - scheduled),
            late_clock_ins: late_clock_ins(&entries),
            entries,
        })
    }
}
