use serde::Serialize;

use crate::modules::time_clock::core::state::TimeEntry;
use crate::modules::time_clock::core::worked_time::{as_hours, worked_minutes};
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeSummary {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingOvertimeRequest {
    #[serde(flatten)]
    pub entry: TimeEntry,
    pub employee: Option<EmployeeSummary>,
    /// Worked time past the scheduled end awaiting review.
    pub overtime_hours: f64,
}

pub struct ListPendingOvertimeRequestsHandler {
    ports: TimeClockPorts,
}

impl ListPendingOvertimeRequestsHandler {
    pub fn new(ports: TimeClockPorts) -> Self {
        Self { ports }
    }

    #[tracing::instrument(skip(self))]
    pub async fn handle(&self, org_id: &str) -> Result<Vec<PendingOvertimeRequest>, ApplicationError> {
        let entries = self
            .ports
            .queries
            .list_pending_overtime(org_id)
            .await
            .map_err(ApplicationError::unexpected)?;

        let mut requests = Vec::with_capacity(entries.len());
        for entry in entries {
            let (Some(clock_out_at), Some(scheduled_end)) = (entry.clock_out_at, entry.scheduled_end)
            else {
                continue;
            };
            let employee = self
                .ports
                .directory
                .find_user(org_id, &entry.employee_id)
                .await
                .map_err(ApplicationError::unexpected)?
                .map(|user| EmployeeSummary {
                    id: user.id,
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                });
            requests.push(PendingOvertimeRequest {
                overtime_hours: as_hours(worked_minutes(scheduled_end, clock_out_at)),
                employee,
                entry,
            });
        }
        Ok(requests)
    }
}
