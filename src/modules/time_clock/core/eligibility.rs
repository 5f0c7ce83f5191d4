// Which shift an employee may clock in against, and when.
//
// Rules
// - A shift accepts clock-ins from `start - allowance` up to `end + 2h`, both
//   bounds inclusive.
// - Candidates are looked up from 12h back to 24h ahead, at most eight of them.
// - A shift whose window contains now wins, earliest start first. Otherwise the
//   next upcoming shift is reported but cannot be clocked in against yet.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::modules::scheduling::core::shift::Shift;

pub const GRACE_AFTER_SHIFT_END: Duration = Duration::hours(2);
pub const CANDIDATE_LOOKBACK: Duration = Duration::hours(12);
pub const CANDIDATE_LOOKAHEAD: Duration = Duration::hours(24);
pub const MAX_CANDIDATE_SHIFTS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockInWindow {
    pub opens_at: DateTime<Utc>,
    pub closes_at: DateTime<Utc>,
}

impl ClockInWindow {
    pub fn for_shift(shift: &Shift, early_allowance_minutes: u32) -> Self {
        Self {
            opens_at: shift.start_time - Duration::minutes(i64::from(early_allowance_minutes)),
            closes_at: shift.end_time + GRACE_AFTER_SHIFT_END,
        }
    }

    pub fn contains(&self, now: DateTime<Utc>) -> bool {
        self.opens_at <= now && now <= self.closes_at
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleShift {
    pub shift: Shift,
    pub window: ClockInWindow,
    pub can_clock_in: bool,
}

/// `(ends_at_or_after, starts_at_or_before)` bounds of the candidate lookup.
pub fn candidate_range(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - CANDIDATE_LOOKBACK, now + CANDIDATE_LOOKAHEAD)
}

pub fn select_eligible_shift(
    candidates: &[Shift],
    now: DateTime<Utc>,
    early_allowance_minutes: u32,
) -> Option<EligibleShift> {
    let windows = candidates
        .iter()
        .map(|shift| (shift, ClockInWindow::for_shift(shift, early_allowance_minutes)));

    let current = windows
        .clone()
        .filter(|(_, window)| window.contains(now))
        .min_by_key(|(shift, _)| shift.start_time);
    if let Some((shift, window)) = current {
        return Some(EligibleShift {
            shift: shift.clone(),
            window,
            can_clock_in: true,
        });
    }

    windows
        .filter(|(_, window)| now < window.opens_at)
        .min_by_key(|(shift, _)| shift.start_time)
        .map(|(shift, window)| EligibleShift {
            shift: shift.clone(),
            window,
            can_clock_in: false,
        })
}
