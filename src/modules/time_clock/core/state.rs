use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeEntryStatus {
    ClockedIn,
    ClockedOut,
    PendingOvertimeApproval,
}

/// One clock-in/clock-out record. `shift_id == None` marks a manual clock-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: String,
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
}

impl TimeEntry {
    pub fn is_open(&self) -> bool {
        self.clock_out_at.is_none() && self.status == TimeEntryStatus::ClockedIn
    }

    pub fn is_pending_overtime_review(&self) -> bool {
        self.status == TimeEntryStatus::PendingOvertimeApproval
            && self.clock_out_at.is_some()
            && self.scheduled_end.is_some()
    }
}

/// Every time entry of one employee, in clock-in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeClockState {
    pub entries: Vec<TimeEntry>,
}

impl TimeClockState {
    pub fn entry(&self, time_entry_id: &str) -> Option<&TimeEntry> {
        self.entries.iter().find(|entry| entry.id == time_entry_id)
    }

    pub(crate) fn entry_mut(&mut self, time_entry_id: &str) -> Option<&mut TimeEntry> {
        self.entries.iter_mut().find(|entry| entry.id == time_entry_id)
    }

    /// The most recent entry that has not been clocked out.
    pub fn open_entry(&self) -> Option<&TimeEntry> {
        self.entries.iter().rev().find(|entry| entry.is_open())
    }

    pub fn open_entry_for_shift(&self, shift_id: &str) -> Option<&TimeEntry> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.is_open() && entry.shift_id.as_deref() == Some(shift_id))
    }

    pub fn entries_for_shift(&self, shift_id: &str) -> impl Iterator<Item = &TimeEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.shift_id.as_deref() == Some(shift_id))
    }
}
