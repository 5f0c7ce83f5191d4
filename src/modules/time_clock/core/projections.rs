// Translate a time clock event into time entry read model mutations.
//
// Purpose
// - Build an upsert on clock-in and minimal patches for clock-out and review.
//
// Responsibilities
// - Stamp every mutation with last_event_id as "stream_id:version".
// - Return the mutations; persisting them is the projector's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::state::{TimeEntry, TimeEntryStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRow {
    pub time_entry_id: String,
    pub org_id: String,
    pub employee_id: String,
    pub shift_id: Option<String>,
    pub clock_in_at: DateTime<Utc>,
    pub clock_out_at: Option<DateTime<Utc>>,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub scheduled_end: Option<DateTime<Utc>>,
    pub is_late: bool,
    pub late_by_minutes: u32,
    pub status: TimeEntryStatus,
    pub notes: Option<String>,
    pub last_event_id: Option<String>,
}

impl From<TimeEntryRow> for TimeEntry {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            id: row.time_entry_id,
            org_id: row.org_id,
            employee_id: row.employee_id,
            shift_id: row.shift_id,
            clock_in_at: row.clock_in_at,
            clock_out_at: row.clock_out_at,
            scheduled_start: row.scheduled_start,
            scheduled_end: row.scheduled_end,
            is_late: row.is_late,
            late_by_minutes: row.late_by_minutes,
            status: row.status,
            notes: row.notes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOutPatch {
    pub clock_out_at: DateTime<Utc>,
    pub status: TimeEntryStatus,
    pub last_event_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Upsert(TimeEntryRow),
    Patch {
        time_entry_id: String,
        patch: ClockOutPatch,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &TimeClockEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        TimeClockEvent::ClockedInV1(e) => vec![Mutation::Upsert(TimeEntryRow {
            time_entry_id: e.time_entry_id.clone(),
            org_id: e.org_id.clone(),
            employee_id: e.employee_id.clone(),
            shift_id: e.shift_id.clone(),
            clock_in_at: e.clock_in_at,
            clock_out_at: None,
            scheduled_start: e.scheduled_start,
            scheduled_end: e.scheduled_end,
            is_late: e.is_late,
            late_by_minutes: e.late_by_minutes,
            status: TimeEntryStatus::ClockedIn,
            notes: e.notes.clone(),
            last_event_id: Some(stream_key),
        })],
        TimeClockEvent::ClockedOutV1(e) => vec![Mutation::Patch {
            time_entry_id: e.time_entry_id.clone(),
            patch: ClockOutPatch {
                clock_out_at: e.clock_out_at,
                status: if e.needs_overtime_approval {
                    TimeEntryStatus::PendingOvertimeApproval
                } else {
                    TimeEntryStatus::ClockedOut
                },
                last_event_id: stream_key,
            },
        }],
        TimeClockEvent::OvertimeReviewedV1(e) => vec![Mutation::Patch {
            time_entry_id: e.time_entry_id.clone(),
            patch: ClockOutPatch {
                clock_out_at: e.clock_out_at,
                status: TimeEntryStatus::ClockedOut,
                last_event_id: stream_key,
            },
        }],
    }
}
