// Scheduled versus actually worked time.
//
// Rules
// - Scheduled minutes come from assigned shifts, net of their break.
// - Actual minutes come from completed entries through `entry_worked_minutes`,
//   so unreviewed overtime counts only up to the scheduled end.
// - Open entries count zero minutes but still count when late.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::core::user::UserProfile;
use crate::modules::time_clock::core::state::TimeEntry;
use crate::modules::time_clock::core::worked_time::{
    as_hours, entry_worked_minutes, scheduled_minutes,
};

pub const UNKNOWN_EMPLOYEE_NAME: &str = "Unknown";

pub fn total_scheduled_minutes(shifts: &[Shift]) -> i64 {
    shifts.iter().map(scheduled_minutes).sum()
}

pub fn total_actual_minutes(entries: &[TimeEntry]) -> i64 {
    entries.iter().map(entry_worked_minutes).sum()
}

pub fn late_clock_ins(entries: &[TimeEntry]) -> usize {
    entries.iter().filter(|entry| entry.is_late).count()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursComparisonRow {
    pub employee_id: String,
    pub employee_name: String,
    pub email: String,
    pub scheduled_hours: f64,
    pub actual_hours: f64,
    pub difference_hours: f64,
    /// `actual / scheduled` as a rounded percentage, 0 without scheduled time.
    pub completion_rate_pct: i64,
    pub late_clock_ins: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct HoursComparisonTotals {
    pub scheduled_hours: f64,
    pub actual_hours: f64,
}

#[derive(Default)]
struct EmployeeTally {
    scheduled_minutes: i64,
    actual_minutes: i64,
    late_clock_ins: u32,
}

/// One row per employee that was scheduled or clocked in, most hours worked first.
pub fn compare_hours(
    shifts: &[Shift],
    entries: &[TimeEntry],
    profiles: &HashMap<String, UserProfile>,
) -> (Vec<HoursComparisonRow>, HoursComparisonTotals) {
    let mut tallies: BTreeMap<&str, EmployeeTally> = BTreeMap::new();
    for shift in shifts {
        if let Some(employee_id) = shift.employee_id.as_deref() {
            tallies.entry(employee_id).or_default().scheduled_minutes += scheduled_minutes(shift);
        }
    }
    for entry in entries {
        let tally = tallies.entry(entry.employee_id.as_str()).or_default();
        tally.actual_minutes += entry_worked_minutes(entry);
        if entry.is_late {
            tally.late_clock_ins += 1;
        }
    }

    let mut rows: Vec<HoursComparisonRow> = tallies
        .into_iter()
        .map(|(employee_id, tally)| {
            let profile = profiles.get(employee_id);
            HoursComparisonRow {
                employee_id: employee_id.to_string(),
                employee_name: profile
                    .map(UserProfile::full_name)
                    .unwrap_or_else(|| UNKNOWN_EMPLOYEE_NAME.to_string()),
                email: profile.map(|p| p.email.clone()).unwrap_or_default(),
                scheduled_hours: as_hours(tally.scheduled_minutes),
                actual_hours: as_hours(tally.actual_minutes),
                difference_hours: as_hours(tally.actual_minutes - tally.scheduled_minutes),
                completion_rate_pct: completion_rate_pct(tally.actual_minutes, tally.scheduled_minutes),
                late_clock_ins: tally.late_clock_ins,
            }
        })
        .collect();
    rows.sort_by(|a, b| b.actual_hours.total_cmp(&a.actual_hours));

    // Totals are summed from the rounded rows so they agree with what is displayed.
    let scheduled: i64 = rows.iter().map(|row| hours_to_minutes(row.scheduled_hours)).sum();
    let actual: i64 = rows.iter().map(|row| hours_to_minutes(row.actual_hours)).sum();
    let totals = HoursComparisonTotals {
        scheduled_hours: as_hours(scheduled),
        actual_hours: as_hours(actual),
    };
    (rows, totals)
}

fn completion_rate_pct(actual_minutes: i64, scheduled_minutes: i64) -> i64 {
    if scheduled_minutes <= 0 {
        return 0;
    }
    (actual_minutes as f64 / scheduled_minutes as f64 * 100.0).round() as i64
}

fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0).round() as i64
}
