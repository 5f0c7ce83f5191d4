// Regular / overtime / double-overtime split of a set of work spans.
//
// Rules
// - Spans are grouped by the local calendar date of their start in the
//   organization's zone; each day's hours past the daily threshold are daily overtime.
// - Hours past the weekly threshold over the whole set are weekly overtime, and
//   hours past twice the weekly threshold are double overtime.
// - Regular hours are total minus every overtime bucket, without clamping, so a
//   day that is also past the weekly threshold is counted in both buckets.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::modules::overtime::core::hours::{WorkSpan, calculate_hours};
use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::shared::core::timezone::{elapsed_hours, local_date};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct OvertimeBreakdown {
    pub regular_hours: f64,
    pub daily_overtime_hours: f64,
    pub weekly_overtime_hours: f64,
    pub double_overtime_hours: f64,
    pub total_hours: f64,
}

impl OvertimeBreakdown {
    /// Daily plus weekly overtime, the figure reports show as "overtime".
    pub fn overtime_hours(&self) -> f64 {
        self.daily_overtime_hours + self.weekly_overtime_hours
    }
}

pub fn calculate_overtime<S: WorkSpan>(spans: &[S], policy: &OrgPolicy) -> OvertimeBreakdown {
    let zone = policy.zone();
    let daily_threshold = f64::from(policy.daily_otc_threshold);
    let weekly_threshold = f64::from(policy.weekly_otc_threshold);

    let mut hours_per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for span in spans {
        *hours_per_day
            .entry(local_date(span.start_time(), zone))
            .or_default() += elapsed_hours(span.start_time(), span.end_time());
    }

    let daily_overtime_hours = hours_per_day
        .values()
        .map(|hours| excess(*hours, daily_threshold))
        .sum::<f64>();

    let total_hours = calculate_hours(spans).total_hours;
    let weekly_overtime_hours = excess(total_hours, weekly_threshold);
    let double_overtime_hours = excess(total_hours, weekly_threshold * 2.0);

    OvertimeBreakdown {
        regular_hours: total_hours
            - daily_overtime_hours
            - weekly_overtime_hours
            - double_overtime_hours,
        daily_overtime_hours,
        weekly_overtime_hours,
        double_overtime_hours,
        total_hours,
    }
}

fn excess(hours: f64, threshold: f64) -> f64 {
    if hours > threshold {
        hours - threshold
    } else {
        0.0
    }
}
