use chrono::{DateTime, Duration, Utc};

use crate::modules::time_clock::core::state::{TimeEntry, TimeEntryStatus};
use crate::tests::fixtures::scheduling::monday_nine_am;

pub struct TimeEntryBuilder {
    inner: TimeEntry,
    worked: Option<Duration>,
    status: Option<TimeEntryStatus>,
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    /// An open entry of emp-1 on shift-1, clocked in at the scheduled start.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: TimeEntry {
                id: id.into(),
                org_id: "org-1".into(),
                employee_id: "emp-1".into(),
                shift_id: Some("shift-1".into()),
                clock_in_at: monday_nine_am(),
                clock_out_at: None,
                scheduled_start: Some(monday_nine_am()),
                scheduled_end: Some(monday_nine_am() + Duration::hours(8)),
                is_late: false,
                late_by_minutes: 0,
                status: TimeEntryStatus::ClockedIn,
                notes: None,
            },
            worked: None,
            status: None,
        }
    }

    pub fn org(mut self, org_id: impl Into<String>) -> Self {
        self.inner.org_id = org_id.into();
        self
    }

    pub fn employee(mut self, employee_id: impl Into<String>) -> Self {
        self.inner.employee_id = employee_id.into();
        self
    }

    /// Moves the clock-in and the scheduled window together.
    pub fn clock_in_at(mut self, at: DateTime<Utc>) -> Self {
        let offset = at - self.inner.clock_in_at;
        self.inner.clock_in_at = at;
        self.inner.scheduled_start = self.inner.scheduled_start.map(|s| s + offset);
        self.inner.scheduled_end = self.inner.scheduled_end.map(|e| e + offset);
        self
    }

    /// `None` makes it a manual entry without a scheduled window.
    pub fn shift(mut self, shift_id: Option<&str>) -> Self {
        self.inner.shift_id = shift_id.map(str::to_string);
        if shift_id.is_none() {
            self.inner.scheduled_start = None;
            self.inner.scheduled_end = None;
            self.inner.notes = Some("Manual clock-in (no assigned shift)".into());
        }
        self
    }

    pub fn late_by(mut self, minutes: u32) -> Self {
        self.inner.is_late = minutes > 0;
        self.inner.late_by_minutes = minutes;
        self
    }

    /// Clocks out `minutes` after clock-in with status CLOCKED_OUT unless `status` says otherwise.
    pub fn clocked_out_after_minutes(mut self, minutes: i64) -> Self {
        self.worked = Some(Duration::minutes(minutes));
        self
    }

    pub fn status(mut self, status: TimeEntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn build(mut self) -> TimeEntry {
        if let Some(worked) = self.worked {
            self.inner.clock_out_at = Some(self.inner.clock_in_at + worked);
            self.inner.status = TimeEntryStatus::ClockedOut;
        }
        if let Some(status) = self.status {
            self.inner.status = status;
        }
        self.inner
    }
}
