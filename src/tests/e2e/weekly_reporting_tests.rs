use chrono::Duration;

use crate::modules::overtime::use_cases::get_weekly_summary::handler::GetWeeklySummaryHandler;
use crate::modules::time_clock::use_cases::clock_in::handler::ClockInHandler;
use crate::modules::time_clock::use_cases::clock_out::handler::ClockOutHandler;
use crate::modules::time_clock::use_cases::get_my_weekly_hours::handler::GetMyWeeklyHoursHandler;
use crate::modules::time_clock::use_cases::get_org_weekly_hours_comparison::csv_export::hours_comparison_csv;
use crate::modules::time_clock::use_cases::get_org_weekly_hours_comparison::handler::GetOrgWeeklyHoursComparisonHandler;
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;
use crate::tests::fixtures::commands::clock_out::ClockOutBuilder;
use crate::tests::fixtures::harness::TestHarness;
use crate::tests::fixtures::scheduling::{ShiftBuilder, monday_nine_am};

/// emp-1 works shift-1 on Monday; emp-2 starts shift-2 half an hour late on
/// Tuesday. A Wednesday shift stays open.
async fn worked_week() -> TestHarness {
    let tuesday_nine_am = monday_nine_am() + Duration::days(1);
    let harness = TestHarness::with(|setup| {
        setup
            .scheduling
            .add_shift(
                ShiftBuilder::new("shift-2")
                    .employee(Some("emp-2"))
                    .starting_at(tuesday_nine_am)
                    .build(),
            )
            .unwrap()
            .add_shift(
                ShiftBuilder::new("shift-open")
                    .employee(None)
                    .starting_at(tuesday_nine_am + Duration::days(1))
                    .build(),
            )
            .unwrap();
    });
    let clock_in = ClockInHandler::new(harness.ports.clone());
    let clock_out = ClockOutHandler::new(harness.ports.clone());

    clock_in.handle(ClockInBuilder::new().time_entry_id("te-1").build()).await.unwrap();
    harness.clock.advance(Duration::hours(8));
    clock_out.handle(ClockOutBuilder::new().build()).await.unwrap();

    harness.clock.set(tuesday_nine_am + Duration::minutes(30));
    clock_in
        .handle(ClockInBuilder::new().time_entry_id("te-2").employee_id("emp-2").build())
        .await
        .unwrap();
    harness.clock.advance(Duration::minutes(450));
    clock_out
        .handle(ClockOutBuilder::new().employee_id("emp-2").build())
        .await
        .unwrap();

    harness
}

#[tokio::test]
async fn compares_scheduled_and_worked_hours_per_employee() {
    let harness = worked_week().await;
    let handler = GetOrgWeeklyHoursComparisonHandler::new(harness.ports.clone());

    let report = handler.handle("org-1", Some("week-1")).await.unwrap();

    let ids: Vec<&str> = report.employees.iter().map(|r| r.employee_id.as_str()).collect();
    assert_eq!(ids, vec!["emp-1", "emp-2"]);
    assert_eq!(report.employees[0].actual_hours, 8.0);
    assert_eq!(report.employees[0].scheduled_hours, 7.5);
    assert_eq!(report.employees[0].completion_rate_pct, 107);
    assert_eq!(report.employees[1].difference_hours, -0.5);
    assert_eq!(report.employees[1].completion_rate_pct, 94);
    assert_eq!(report.employees[1].late_clock_ins, 1);
    assert_eq!(report.totals.scheduled_hours, 15.5);
    assert_eq!(report.totals.actual_hours, 15.5);

    let csv = hours_comparison_csv(&report.employees).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[1],
        r#""Emp-1 Tester","emp-1@example.com","7.50","8.00","0.50","107","0""#
    );
}

#[tokio::test]
async fn reports_an_employees_own_week() {
    let harness = worked_week().await;
    let handler = GetMyWeeklyHoursHandler::new(harness.ports.clone());

    let week = handler.handle("org-1", "emp-2", Some("2025-03-09")).await.unwrap();

    assert_eq!(week.scheduled_hours, 8.0);
    assert_eq!(week.actual_hours, 7.5);
    assert_eq!(week.late_clock_ins, 1);
    assert_eq!(week.entries.len(), 1);
}

#[tokio::test]
async fn summarizes_the_schedule_against_worked_time() {
    let harness = worked_week().await;
    let handler = GetWeeklySummaryHandler::new(
        harness.ports.organizations.clone(),
        harness.ports.weeks.clone(),
        harness.ports.shifts.clone(),
        harness.ports.queries.clone(),
        harness.ports.clock.clone(),
    );

    let summary = handler.handle("org-1", None).await.unwrap();

    assert_eq!(summary.schedule_week_id, "week-1");
    assert_eq!(summary.schedule.total_shifts, 3);
    assert_eq!(summary.schedule.open_shifts, 1);
    assert_eq!(summary.schedule.scheduled_employees, 2);
    assert_eq!(summary.actual_worked_hours, 15.5);
    assert_eq!(summary.late_clock_ins, 1);
}
