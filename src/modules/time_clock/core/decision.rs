use serde::Serialize;

use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::intents::TimeClockIntent;

pub const MAX_ENTRIES_PER_SHIFT: usize = 3;

/// Coarse classification the inbound adapters translate into status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    WindowViolation,
    CapacityExceeded,
    Validation,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("You are already clocked in")]
    AlreadyClockedIn,

    #[error("Assigned shift not found for clock in")]
    AssignedShiftNotFound,

    #[error("Too early to clock in. Earliest allowed clock-in is {earliest}")]
    TooEarly { earliest: String },

    #[error("This shift is no longer eligible for clock in")]
    NoLongerEligible,

    #[error("Maximum of {max} clock-in/out records allowed for this shift")]
    TooManyEntries { max: usize },

    #[error("Provide either a time entry id or a shift id, not both")]
    AmbiguousClockOutTarget,

    #[error("No active clock-in entry found")]
    NoActiveEntry,

    #[error("Clock-out time must be after clock-in time")]
    ClockOutNotAfterClockIn,

    #[error("Overtime request not found")]
    OvertimeRequestNotFound,
}

impl DecideError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecideError::AssignedShiftNotFound | DecideError::OvertimeRequestNotFound => {
                ErrorKind::NotFound
            }
            DecideError::AlreadyClockedIn | DecideError::NoActiveEntry => ErrorKind::InvalidState,
            DecideError::TooEarly { .. } | DecideError::NoLongerEligible => {
                ErrorKind::WindowViolation
            }
            DecideError::TooManyEntries { .. } => ErrorKind::CapacityExceeded,
            DecideError::AmbiguousClockOutTarget | DecideError::ClockOutNotAfterClockIn => {
                ErrorKind::Validation
            }
        }
    }
}

#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<TimeClockEvent>,
        intents: Vec<TimeClockIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

#[cfg(test)]
mod decision_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DecideError::AlreadyClockedIn, ErrorKind::InvalidState)]
    #[case(DecideError::AssignedShiftNotFound, ErrorKind::NotFound)]
    #[case(DecideError::TooEarly { earliest: "8:55 AM".into() }, ErrorKind::WindowViolation)]
    #[case(DecideError::NoLongerEligible, ErrorKind::WindowViolation)]
    #[case(DecideError::TooManyEntries { max: 3 }, ErrorKind::CapacityExceeded)]
    #[case(DecideError::AmbiguousClockOutTarget, ErrorKind::Validation)]
    #[case(DecideError::NoActiveEntry, ErrorKind::InvalidState)]
    #[case(DecideError::ClockOutNotAfterClockIn, ErrorKind::Validation)]
    #[case(DecideError::OvertimeRequestNotFound, ErrorKind::NotFound)]
    fn it_should_classify_every_rejection(#[case] error: DecideError, #[case] kind: ErrorKind) {
        assert_eq!(error.kind(), kind);
    }

    #[rstest]
    fn it_should_format_the_earliest_clock_in() {
        let error = DecideError::TooEarly {
            earliest: "8:55 AM".into(),
        };
        assert_eq!(
            error.to_string(),
            "Too early to clock in. Earliest allowed clock-in is 8:55 AM"
        );
    }
}
