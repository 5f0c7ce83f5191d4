// GraphQL types shared by the time clock resolvers.

use async_graphql::{Context, Enum, ErrorExtensions, SimpleObject};
use chrono::{DateTime, Utc};

use crate::modules::time_clock::core::state::{TimeEntry, TimeEntryStatus};
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::shell::actor::Actor;
use crate::shell::http::status_for;

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
pub enum GqlTimeEntryStatus {
    ClockedIn,
    ClockedOut,
    PendingOvertimeApproval,
}

impl From<TimeEntryStatus> for GqlTimeEntryStatus {
    fn from(status: TimeEntryStatus) -> Self {
        match status {
            TimeEntryStatus::ClockedIn => Self::ClockedIn,
            TimeEntryStatus::ClockedOut => Self::ClockedOut,
            TimeEntryStatus::PendingOvertimeApproval => Self::PendingOvertimeApproval,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: String,
    pub employee_id: String,
    pub shift_id: Option<String>,
    pub clock_in_at: DateTime<Utc>,
    pub clock_out_at: Option<DateTime<Utc>>,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub scheduled_end: Option<DateTime<Utc>>,
    pub is_late: bool,
    pub late_by_minutes: u32,
    pub status: GqlTimeEntryStatus,
    pub notes: Option<String>,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(v: TimeEntry) -> Self {
        Self {
            id: v.id,
            employee_id: v.employee_id,
            shift_id: v.shift_id,
            clock_in_at: v.clock_in_at,
            clock_out_at: v.clock_out_at,
            scheduled_start: v.scheduled_start,
            scheduled_end: v.scheduled_end,
            is_late: v.is_late,
            late_by_minutes: v.late_by_minutes,
            status: v.status.into(),
            notes: v.notes,
        }
    }
}

/// The caller the `/gql` route attached to the request.
pub fn actor<'a>(context: &Context<'a>) -> async_graphql::Result<&'a Actor> {
    context.data::<Actor>()
}

pub fn manager<'a>(context: &Context<'a>) -> async_graphql::Result<&'a Actor> {
    let actor = actor(context)?;
    if !actor.is_manager() {
        return Err(async_graphql::Error::new("Insufficient permissions")
            .extend_with(|_, e| e.set("status", 403)));
    }
    Ok(actor)
}

/// Carries the HTTP status the REST surface would answer with.
pub fn gql_error(error: ApplicationError) -> async_graphql::Error {
    let status = status_for(&error).as_u16();
    let message = if status >= 500 {
        "Internal server error".to_string()
    } else {
        error.to_string()
    };
    async_graphql::Error::new(message).extend_with(|_, e| e.set("status", status))
}
