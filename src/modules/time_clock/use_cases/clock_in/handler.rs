use chrono::{DateTime, Utc};

use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::time_clock::core::decision::Decision;
use crate::modules::time_clock::core::eligibility::{
    MAX_CANDIDATE_SHIFTS, candidate_range, select_eligible_shift,
};
use crate::modules::time_clock::core::state::TimeEntry;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_in::command::ClockIn;
use crate::modules::time_clock::use_cases::clock_in::decide::{
    ManualReason, ShiftResolution, decide_clock_in,
};
use crate::modules::time_clock::use_cases::clock_stream::{commit, load_clock, load_policy};

pub struct ClockInHandler {
    ports: TimeClockPorts,
}

impl ClockInHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    #[tracing::instrument(skip(self, command), fields(org_id = %command.org_id, employee_id = %command.employee_id))]
    pub async fn handle(&self, command: ClockIn) -> Result<TimeEntry, ApplicationError> {
        let policy = load_policy(&self.ports, &command.org_id).await?;
        let loaded = load_clock(&self.ports, &command.org_id, &command.employee_id).await?;
        let now = self.ports.clock.now();
        let resolution = self.resolve_shift(&command, &policy, now).await?;

        let time_entry_id = command.time_entry_id.clone();
        match decide_clock_in(&loaded.state, command, resolution, &policy, now) {
            Decision::Accepted { events, intents } => {
                let state = commit(&self.ports, loaded, events, intents).await?;
                let entry = state.entry(&time_entry_id).cloned().ok_or_else(|| {
                    ApplicationError::Unexpected(format!("time entry {time_entry_id} missing"))
                })?;
                tracing::info!(
                    time_entry_id = %entry.id,
                    shift_id = ?entry.shift_id,
                    late_by_minutes = entry.late_by_minutes,
                    "clocked in"
                );
                Ok(entry)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "clock-in rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }

    async fn resolve_shift(
        &self,
        command: &ClockIn,
        policy: &OrgPolicy,
        now: DateTime<Utc>,
    ) -> Result<ShiftResolution, ApplicationError> {
        if let Some(shift_id) = &command.shift_id {
            let shift = self
                .ports
                .shifts
                .find_for_employee(&command.org_id, &command.employee_id, shift_id)
                .await
                .map_err(ApplicationError::unexpected)?;
            return Ok(shift.map_or(ShiftResolution::AssignedMissing, ShiftResolution::Assigned));
        }
        if command.force {
            return Ok(ShiftResolution::Manual(ManualReason::Forced));
        }

        let (ends_at_or_after, starts_at_or_before) = candidate_range(now);
        let candidates = self
            .ports
            .shifts
            .list_overlapping_for_employee(
                &command.org_id,
                &command.employee_id,
                ends_at_or_after,
                starts_at_or_before,
                MAX_CANDIDATE_SHIFTS,
            )
            .await
            .map_err(ApplicationError::unexpected)?;

        Ok(
            select_eligible_shift(&candidates, now, policy.effective_early_allowance_minutes())
                .map_or(
                    ShiftResolution::Manual(ManualReason::NoAssignedShift),
                    |eligible| ShiftResolution::Assigned(eligible.shift),
                ),
        )
    }
}
