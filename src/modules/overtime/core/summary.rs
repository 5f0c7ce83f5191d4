// Schedule-side figures of a week: how many shifts, how many hours, who is
// heading into overtime.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::modules::overtime::core::hours::calculate_hours;
use crate::modules::overtime::core::overtime::calculate_overtime;
use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::scheduling::core::shift::{Shift, ShiftType};

pub const MAX_OVERTIME_RISKS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OvertimeRisk {
    pub employee_id: String,
    pub hours: f64,
    pub is_at_risk: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScheduleSummary {
    pub total_shifts: usize,
    pub total_scheduled_hours: f64,
    pub regular_hours: f64,
    /// Daily plus weekly overtime.
    pub overtime_hours: f64,
    pub double_overtime_hours: f64,
    pub scheduled_employees: usize,
    pub open_shifts: usize,
    pub shift_counts: BTreeMap<ShiftType, usize>,
    pub department_shifts: BTreeMap<String, usize>,
    pub location_shifts: BTreeMap<String, usize>,
    /// Elapsed hours of REGULAR shifts per department.
    pub department_regular_hours: BTreeMap<String, f64>,
    pub overtime_risks: Vec<OvertimeRisk>,
}

pub fn summarize_schedule(shifts: &[Shift], policy: &OrgPolicy) -> ScheduleSummary {
    let overtime = calculate_overtime(shifts, policy);
    let mut summary = ScheduleSummary {
        total_shifts: shifts.len(),
        total_scheduled_hours: overtime.total_hours,
        regular_hours: overtime.regular_hours,
        overtime_hours: overtime.overtime_hours(),
        double_overtime_hours: overtime.double_overtime_hours,
        ..ScheduleSummary::default()
    };

    let mut employees = BTreeSet::new();
    let mut hours_per_employee: BTreeMap<&str, f64> = BTreeMap::new();
    for shift in shifts {
        let hours = calculate_hours(std::slice::from_ref(shift)).total_hours;
        *summary.shift_counts.entry(shift.shift_type).or_default() += 1;
        if let Some(department_id) = &shift.department_id {
            *summary
                .department_shifts
                .entry(department_id.clone())
                .or_default() += 1;
            if shift.shift_type == ShiftType::Regular {
                *summary
                    .department_regular_hours
                    .entry(department_id.clone())
                    .or_default() += hours;
            }
        }
        if let Some(location_id) = &shift.location_id {
            *summary.location_shifts.entry(location_id.clone()).or_default() += 1;
        }
        match shift.employee_id.as_deref() {
            Some(employee_id) => {
                employees.insert(employee_id);
                *hours_per_employee.entry(employee_id).or_default() += hours;
            }
            None => summary.open_shifts += 1,
        }
    }
    summary.scheduled_employees = employees.len();

    let weekly_threshold = f64::from(policy.weekly_otc_threshold);
    let mut risks: Vec<OvertimeRisk> = hours_per_employee
        .into_iter()
        .map(|(employee_id, hours)| OvertimeRisk {
            employee_id: employee_id.to_string(),
            hours,
            is_at_risk: hours > weekly_threshold,
        })
        .collect();
    risks.sort_by(|a, b| b.hours.total_cmp(&a.hours));
    risks.truncate(MAX_OVERTIME_RISKS);
    summary.overtime_risks = risks;

    summary
}
