use crate::modules::time_clock::core::events::v1::overtime_reviewed::OvertimeDecision;

/// Side effects requested by an accepted decision. They are dispatched only after
/// the events are stored, and their failure never undoes the decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeClockIntent {
    NotifyManagersOfLateClockIn {
        org_id: String,
        employee_id: String,
        time_entry_id: String,
        late_by_minutes: u32,
    },
    NotifyManagersOfOvertime {
        org_id: String,
        employee_id: String,
        time_entry_id: String,
    },
    NotifyEmployeeOfOvertimeReview {
        org_id: String,
        employee_id: String,
        time_entry_id: String,
        decision: OvertimeDecision,
    },
}
