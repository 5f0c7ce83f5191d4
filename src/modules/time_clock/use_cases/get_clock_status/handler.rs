use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::time_clock::core::eligibility::{
    MAX_CANDIDATE_SHIFTS, candidate_range, select_eligible_shift,
};
use crate::modules::time_clock::core::state::TimeEntry;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_stream::{load_clock, load_policy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockPolicy {
    pub clock_in_early_allowance_minutes: u32,
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibleShiftView {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub can_clock_in: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockStatus {
    pub policy: ClockPolicy,
    pub active_entry: Option<TimeEntry>,
    pub eligible_shift: Option<EligibleShiftView>,
    pub earliest_clock_in_at: Option<DateTime<Utc>>,
}

pub struct GetClockStatusHandler {
    ports: TimeClockPorts,
}

impl GetClockStatusHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(
        &self,
        org_id: &str,
        employee_id: &str,
    ) -> Result<ClockStatus, ApplicationError> {
        let policy = load_policy(&self.ports, org_id).await?;
        let loaded = load_clock(&self.ports, org_id, employee_id).await?;
        let now = self.ports.clock.now();
        let allowance = policy.effective_early_allowance_minutes();

        let (ends_at_or_after, starts_at_or_before) = candidate_range(now);
        let candidates = self
            .ports
            .shifts
            .list_overlapping_for_employee(
                org_id,
                employee_id,
                ends_at_or_after,
                starts_at_or_before,
                MAX_CANDIDATE_SHIFTS,
            )
            .await
            .map_err(ApplicationError::unexpected)?;
        let eligible = select_eligible_shift(&candidates, now, allowance);

        Ok(ClockStatus {
            policy: ClockPolicy {
                clock_in_early_allowance_minutes: allowance,
                timezone: policy.timezone,
            },
            active_entry: loaded.state.open_entry().cloned(),
            earliest_clock_in_at: eligible.as_ref().map(|e| e.window.opens_at),
            eligible_shift: eligible.map(|e| EligibleShiftView {
                id: e.shift.id,
                start_time: e.shift.start_time,
                end_time: e.shift.end_time,
                can_clock_in: e.can_clock_in,
            }),
        })
    }
}
