use serde::Serialize;

use crate::modules::time_clock::core::decision::Decision;
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::state::{TimeEntry, TimeEntryStatus};
use crate::modules::time_clock::core::worked_time::{as_hours, worked_minutes};
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_out::command::ClockOut;
use crate::modules::time_clock::use_cases::clock_out::decide::decide_clock_out;
use crate::modules::time_clock::use_cases::clock_stream::{commit, load_clock};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClockOutOutcome {
    #[serde(flatten)]
    pub entry: TimeEntry,
    pub worked_minutes: i64,
    pub worked_hours: f64,
    pub needs_overtime_approval: bool,
}

pub struct ClockOutHandler {
    ports: TimeClockPorts,
}

impl ClockOutHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    #[tracing::instrument(skip(self, command), fields(org_id = %command.org_id, employee_id = %command.employee_id))]
    pub async fn handle(&self, command: ClockOut) -> Result<ClockOutOutcome, ApplicationError> {
        let loaded = load_clock(&self.ports, &command.org_id, &command.employee_id).await?;
        let now = self.ports.clock.now();

        match decide_clock_out(&loaded.state, command, now) {
            Decision::Accepted { events, intents } => {
                let time_entry_id = events
                    .first()
                    .map(TimeClockEvent::time_entry_id)
                    .unwrap_or_default()
                    .to_string();
                let state = commit(&self.ports, loaded, events, intents).await?;
                let entry = state.entry(&time_entry_id).cloned().ok_or_else(|| {
                    ApplicationError::Unexpected(format!("time entry {time_entry_id} missing"))
                })?;
                let clock_out_at = entry.clock_out_at.unwrap_or(now);
                let minutes = worked_minutes(entry.clock_in_at, clock_out_at);
                let needs_overtime_approval =
                    entry.status == TimeEntryStatus::PendingOvertimeApproval;
                tracing::info!(
                    %time_entry_id,
                    worked_minutes = minutes,
                    needs_overtime_approval,
                    "clocked out"
                );
                Ok(ClockOutOutcome {
                    entry,
                    worked_minutes: minutes,
                    worked_hours: as_hours(minutes),
                    needs_overtime_approval,
                })
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "clock-out rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
