use crate::modules::time_clock::core::decision::{DecideError, Decision};
use crate::modules::time_clock::core::state::TimeEntry;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_stream::{commit, load_clock};
use crate::modules::time_clock::use_cases::review_overtime_request::command::ReviewOvertimeRequest;
use crate::modules::time_clock::use_cases::review_overtime_request::decide::decide_review_overtime;

pub struct ReviewOvertimeRequestHandler {
    ports: TimeClockPorts,
}

impl ReviewOvertimeRequestHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    #[tracing::instrument(skip(self, command), fields(org_id = %command.org_id, time_entry_id = %command.time_entry_id))]
    pub async fn handle(&self, command: ReviewOvertimeRequest) -> Result<TimeEntry, ApplicationError> {
        // The projection locates the owning employee; the stream decides.
        let owner = self
            .ports
            .queries
            .find_by_id(&command.org_id, &command.time_entry_id)
            .await
            .map_err(ApplicationError::unexpected)?
            .ok_or(ApplicationError::Domain(DecideError::OvertimeRequestNotFound))?;

        let loaded = load_clock(&self.ports, &command.org_id, &owner.employee_id).await?;
        let now = self.ports.clock.now();
        let time_entry_id = command.time_entry_id.clone();
        let decision = command.decision;

        match decide_review_overtime(&loaded.state, command, now) {
            Decision::Accepted { events, intents } => {
                let state = commit(&self.ports, loaded, events, intents).await?;
                let entry = state.entry(&time_entry_id).cloned().ok_or_else(|| {
                    ApplicationError::Unexpected(format!("time entry {time_entry_id} missing"))
                })?;
                tracing::info!(?decision, clock_out_at = ?entry.clock_out_at, "overtime reviewed");
                Ok(entry)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "overtime review rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
