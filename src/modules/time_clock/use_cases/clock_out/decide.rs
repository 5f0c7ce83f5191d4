use chrono::{DateTime, Utc};

use crate::modules::time_clock::core::decision::{DecideError, Decision};
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::events::v1::clocked_out::ClockedOutV1;
use crate::modules::time_clock::core::intents::TimeClockIntent;
use crate::modules::time_clock::core::state::{TimeClockState, TimeEntry};
use crate::modules::time_clock::use_cases::clock_out::command::ClockOut;

fn resolve_open_entry<'a>(
    state: &'a TimeClockState,
    command: &ClockOut,
) -> Result<&'a TimeEntry, DecideError> {
    let entry = match (&command.time_entry_id, &command.shift_id) {
        (Some(_), Some(_)) => return Err(DecideError::AmbiguousClockOutTarget),
        (Some(time_entry_id), None) => state.entry(time_entry_id).filter(|e| e.is_open()),
        (None, Some(shift_id)) => state.open_entry_for_shift(shift_id),
        (None, None) => state.open_entry(),
    };
    entry.ok_or(DecideError::NoActiveEntry)
}

pub fn decide_clock_out(state: &TimeClockState, command: ClockOut, now: DateTime<Utc>) -> Decision {
    let entry = match resolve_open_entry(state, &command) {
        Ok(entry) => entry,
        Err(reason) => return Decision::Rejected { reason },
    };

    if now <= entry.clock_in_at {
        return Decision::Rejected {
            reason: DecideError::ClockOutNotAfterClockIn,
        };
    }

    let needs_overtime_approval = entry
        .scheduled_end
        .is_some_and(|scheduled_end| now > scheduled_end);

    let event = ClockedOutV1 {
        time_entry_id: entry.id.clone(),
        org_id: command.org_id.clone(),
        employee_id: command.employee_id.clone(),
        clock_out_at: now,
        needs_overtime_approval,
    };

    let intents = if needs_overtime_approval {
        vec![TimeClockIntent::NotifyManagersOfOvertime {
            org_id: command.org_id,
            employee_id: command.employee_id,
            time_entry_id: entry.id.clone(),
        }]
    } else {
        vec![]
    };

    Decision::Accepted {
        events: vec![TimeClockEvent::ClockedOutV1(event)],
        intents,
    }
}
