use chrono::{DateTime, Utc};

use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::time_clock::core::decision::{DecideError, Decision, MAX_ENTRIES_PER_SHIFT};
use crate::modules::time_clock::core::eligibility::ClockInWindow;
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::events::v1::clocked_in::ClockedInV1;
use crate::modules::time_clock::core::intents::TimeClockIntent;
use crate::modules::time_clock::core::state::TimeClockState;
use crate::modules::time_clock::use_cases::clock_in::command::ClockIn;
use crate::shared::core::timezone::format_clock_time;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualReason {
    Forced,
    NoAssignedShift,
}

impl ManualReason {
    pub fn note(self) -> &'static str {
        match self {
            ManualReason::Forced => "Manual clock-in (force)",
            ManualReason::NoAssignedShift => "Manual clock-in (no assigned shift)",
        }
    }
}

/// Outcome of looking up the shift a clock-in targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftResolution {
    Manual(ManualReason),
    Assigned(Shift),
    /// An explicit shift id that is not assigned to the employee.
    AssignedMissing,
}

pub fn decide_clock_in(
    state: &TimeClockState,
    command: ClockIn,
    resolution: ShiftResolution,
    policy: &OrgPolicy,
    now: DateTime<Utc>,
) -> Decision {
    if state.open_entry().is_some() {
        return Decision::Rejected {
            reason: DecideError::AlreadyClockedIn,
        };
    }

    let shift = match resolution {
        ShiftResolution::AssignedMissing => {
            return Decision::Rejected {
                reason: DecideError::AssignedShiftNotFound,
            };
        }
        ShiftResolution::Manual(reason) => {
            let event = ClockedInV1 {
                time_entry_id: command.time_entry_id,
                org_id: command.org_id,
                employee_id: command.employee_id,
                shift_id: None,
                clock_in_at: now,
                scheduled_start: None,
                scheduled_end: None,
                is_late: false,
                late_by_minutes: 0,
                notes: Some(reason.note().to_string()),
            };
            return Decision::Accepted {
                events: vec![TimeClockEvent::ClockedInV1(event)],
                intents: vec![],
            };
        }
        ShiftResolution::Assigned(shift) => shift,
    };

    let window = ClockInWindow::for_shift(&shift, policy.effective_early_allowance_minutes());
    if now < window.opens_at {
        return Decision::Rejected {
            reason: DecideError::TooEarly {
                earliest: format_clock_time(window.opens_at, policy.zone()),
            },
        };
    }
    if now > window.closes_at {
        return Decision::Rejected {
            reason: DecideError::NoLongerEligible,
        };
    }

    let existing = state.entries_for_shift(&shift.id).count();
    if existing >= MAX_ENTRIES_PER_SHIFT {
        return Decision::Rejected {
            reason: DecideError::TooManyEntries {
                max: MAX_ENTRIES_PER_SHIFT,
            },
        };
    }

    // Only the first clock-in against a shift can be late.
    let late_by_minutes = if existing == 0 {
        u32::try_from((now - shift.start_time).num_minutes().max(0)).unwrap_or(u32::MAX)
    } else {
        0
    };

    let event = ClockedInV1 {
        time_entry_id: command.time_entry_id.clone(),
        org_id: command.org_id.clone(),
        employee_id: command.employee_id.clone(),
        shift_id: Some(shift.id.clone()),
        clock_in_at: now,
        scheduled_start: Some(shift.start_time),
        scheduled_end: Some(shift.end_time),
        is_late: late_by_minutes > 0,
        late_by_minutes,
        notes: None,
    };

    let intents = if late_by_minutes > 0 {
        vec![TimeClockIntent::NotifyManagersOfLateClockIn {
            org_id: command.org_id,
            employee_id: command.employee_id,
            time_entry_id: command.time_entry_id,
            late_by_minutes,
        }]
    } else {
        vec![]
    };

    Decision::Accepted {
        events: vec![TimeClockEvent::ClockedInV1(event)],
        intents,
    }
}
