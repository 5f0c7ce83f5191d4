use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::state::{TimeClockState, TimeEntry, TimeEntryStatus};

pub fn evolve(mut state: TimeClockState, event: TimeClockEvent) -> TimeClockState {
    match event {
        TimeClockEvent::ClockedInV1(e) => {
            if state.entry(&e.time_entry_id).is_none() {
                state.entries.push(TimeEntry {
                    id: e.time_entry_id,
                    org_id: e.org_id,
                    employee_id: e.employee_id,
                    shift_id: e.shift_id,
                    clock_in_at: e.clock_in_at,
                    clock_out_at: None,
                    scheduled_start: e.scheduled_start,
                    scheduled_end: e.scheduled_end,
                    is_late: e.is_late,
                    late_by_minutes: e.late_by_minutes,
                    status: TimeEntryStatus::ClockedIn,
                    notes: e.notes,
                });
            }
        }
        TimeClockEvent::ClockedOutV1(e) => {
            if let Some(entry) = state.entry_mut(&e.time_entry_id) {
                entry.clock_out_at = Some(e.clock_out_at);
                entry.status = if e.needs_overtime_approval {
                    TimeEntryStatus::PendingOvertimeApproval
                } else {
                    TimeEntryStatus::ClockedOut
                };
            }
        }
        TimeClockEvent::OvertimeReviewedV1(e) => {
            if let Some(entry) = state.entry_mut(&e.time_entry_id) {
                entry.clock_out_at = Some(e.clock_out_at);
                entry.status = TimeEntryStatus::ClockedOut;
            }
        }
    }
    state
}
