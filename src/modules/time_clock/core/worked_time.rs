use chrono::{DateTime, Utc};

use crate::modules::scheduling::core::shift::Shift;
use crate::modules::time_clock::core::state::{TimeEntry, TimeEntryStatus};

/// Whole minutes between two instants, never negative.
pub fn worked_minutes(clock_in_at: DateTime<Utc>, clock_out_at: DateTime<Utc>) -> i64 {
    (clock_out_at - clock_in_at).num_minutes().max(0)
}

/// Clock-out counted towards worked time. Unreviewed overtime stops at the
/// scheduled end.
pub fn effective_clock_out(entry: &TimeEntry) -> Option<DateTime<Utc>> {
    let clock_out_at = entry.clock_out_at?;
    match (entry.status, entry.scheduled_end) {
        (TimeEntryStatus::PendingOvertimeApproval, Some(scheduled_end)) => Some(scheduled_end),
        _ => Some(clock_out_at),
    }
}

pub fn entry_worked_minutes(entry: &TimeEntry) -> i64 {
    effective_clock_out(entry)
        .map(|clock_out_at| worked_minutes(entry.clock_in_at, clock_out_at))
        .unwrap_or(0)
}

/// Scheduled minutes of a shift net of its break.
pub fn scheduled_minutes(shift: &Shift) -> i64 {
    let total = shift.duration().num_minutes().max(0);
    (total - i64::from(shift.break_duration_minutes)).max(0)
}

/// Minutes as hours rounded to two decimals, halves rounding up.
pub fn as_hours(minutes: i64) -> f64 {
    (minutes as f64 / 60.0 * 100.0 + 0.5).floor() / 100.0
}
