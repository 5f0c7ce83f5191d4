use chrono::Duration;

use crate::modules::time_clock::core::events::v1::clocked_in::ClockedInV1;
use crate::modules::time_clock::core::events::v1::clocked_out::ClockedOutV1;
use crate::modules::time_clock::core::events::v1::overtime_reviewed::{
    OvertimeDecision, OvertimeReviewedV1,
};
use crate::tests::fixtures::scheduling::monday_nine_am;

/// emp-1 clocking in on time against shift-1 (Monday 09:00-17:00).
pub fn make_clocked_in_v1_event(time_entry_id: &str) -> ClockedInV1 {
    ClockedInV1 {
        time_entry_id: time_entry_id.into(),
        org_id: "org-1".into(),
        employee_id: "emp-1".into(),
        shift_id: Some("shift-1".into()),
        clock_in_at: monday_nine_am(),
        scheduled_start: Some(monday_nine_am()),
        scheduled_end: Some(monday_nine_am() + Duration::hours(8)),
        is_late: false,
        late_by_minutes: 0,
        notes: None,
    }
}

pub fn make_clocked_out_v1_event(time_entry_id: &str, worked: Duration) -> ClockedOutV1 {
    ClockedOutV1 {
        time_entry_id: time_entry_id.into(),
        org_id: "org-1".into(),
        employee_id: "emp-1".into(),
        clock_out_at: monday_nine_am() + worked,
        needs_overtime_approval: false,
    }
}

pub fn make_overtime_reviewed_v1_event(
    time_entry_id: &str,
    decision: OvertimeDecision,
) -> OvertimeReviewedV1 {
    let clock_out_at = match decision {
        OvertimeDecision::Approve => monday_nine_am() + Duration::hours(9),
        OvertimeDecision::Deny => monday_nine_am() + Duration::hours(8),
    };
    OvertimeReviewedV1 {
        time_entry_id: time_entry_id.into(),
        org_id: "org-1".into(),
        employee_id: "emp-1".into(),
        decision,
        clock_out_at,
        reviewed_by: "manager-1".into(),
        reviewed_at: monday_nine_am() + Duration::days(1),
    }
}
