use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::modules::scheduling::core::shift::Shift;
use crate::shared::core::timezone::elapsed_hours;

/// Anything with a start, an end and an unpaid-or-paid break length.
pub trait WorkSpan {
    fn start_time(&self) -> DateTime<Utc>;
    fn end_time(&self) -> DateTime<Utc>;
    fn break_duration_minutes(&self) -> u32;
}

impl WorkSpan for Shift {
    fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    fn break_duration_minutes(&self) -> u32 {
        self.break_duration_minutes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct HoursTotals {
    pub total_hours: f64,
    pub break_minutes: u32,
    pub break_hours: f64,
}

/// Sums elapsed hours and break minutes. Breaks are reported, never subtracted.
pub fn calculate_hours<S: WorkSpan>(spans: &[S]) -> HoursTotals {
    let (total_hours, break_minutes) = spans.iter().fold((0.0, 0u32), |(hours, breaks), span| {
        (
            hours + elapsed_hours(span.start_time(), span.end_time()),
            breaks + span.break_duration_minutes(),
        )
    });
    HoursTotals {
        total_hours,
        break_minutes,
        break_hours: f64::from(break_minutes) / 60.0,
    }
}

#[cfg(test)]
mod hours_tests {
    use super::*;
    use crate::tests::fixtures::scheduling::{ShiftBuilder, monday_nine_am};
    use chrono::Duration;
    use rstest::rstest;

    #[rstest]
    fn it_should_return_zeros_for_no_spans() {
        let shifts: Vec<Shift> = vec![];
        assert_eq!(calculate_hours(&shifts), HoursTotals::default());
    }

    #[rstest]
    fn it_should_sum_hours_without_subtracting_breaks() {
        let shifts = vec![
            ShiftBuilder::new("shift-1").break_minutes(30).build(),
            ShiftBuilder::new("shift-2")
                .starting_at(monday_nine_am() + Duration::days(1))
                .lasting(Duration::minutes(270))
                .break_minutes(15)
                .build(),
        ];
        let totals = calculate_hours(&shifts);
        assert_eq!(totals.total_hours, 12.5);
        assert_eq!(totals.break_minutes, 45);
        assert_eq!(totals.break_hours, 0.75);
    }

    #[rstest]
    fn it_should_measure_overnight_spans_between_instants() {
        let shift = ShiftBuilder::new("night")
            .starting_at(monday_nine_am() + Duration::hours(13))
            .lasting(Duration::hours(9))
            .build();
        assert_eq!(calculate_hours(&[shift]).total_hours, 9.0);
    }
}
