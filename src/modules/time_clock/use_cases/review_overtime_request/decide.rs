use chrono::{DateTime, Utc};

use crate::modules::time_clock::core::decision::{DecideError, Decision};
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::events::v1::overtime_reviewed::OvertimeReviewedV1;
use crate::modules::time_clock::core::intents::TimeClockIntent;
use crate::modules::time_clock::core::state::TimeClockState;
use crate::modules::time_clock::use_cases::review_overtime_request::command::{
    OvertimeDecision, ReviewOvertimeRequest,
};

pub fn decide_review_overtime(
    state: &TimeClockState,
    command: ReviewOvertimeRequest,
    now: DateTime<Utc>,
) -> Decision {
    let pending = state
        .entry(&command.time_entry_id)
        .filter(|entry| entry.org_id == command.org_id && entry.is_pending_overtime_review());

    let (entry, clock_out_at, scheduled_end) = match pending {
        Some(entry) => match (entry.clock_out_at, entry.scheduled_end) {
            (Some(clock_out_at), Some(scheduled_end)) => (entry, clock_out_at, scheduled_end),
            _ => {
                return Decision::Rejected {
                    reason: DecideError::OvertimeRequestNotFound,
                };
            }
        },
        None => {
            return Decision::Rejected {
                reason: DecideError::OvertimeRequestNotFound,
            };
        }
    };

    let settled_clock_out = match command.decision {
        OvertimeDecision::Approve => clock_out_at,
        OvertimeDecision::Deny => scheduled_end,
    };

    let event = OvertimeReviewedV1 {
        time_entry_id: entry.id.clone(),
        org_id: entry.org_id.clone(),
        employee_id: entry.employee_id.clone(),
        decision: command.decision,
        clock_out_at: settled_clock_out,
        reviewed_by: command.reviewed_by,
        reviewed_at: now,
    };

    Decision::Accepted {
        events: vec![TimeClockEvent::OvertimeReviewedV1(event)],
        intents: vec![TimeClockIntent::NotifyEmployeeOfOvertimeReview {
            org_id: entry.org_id.clone(),
            employee_id: entry.employee_id.clone(),
            time_entry_id: entry.id.clone(),
            decision: command.decision,
        }],
    }
}
