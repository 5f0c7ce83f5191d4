use axum::http::StatusCode;
use chrono::Duration;

use crate::shared::infrastructure::notifications::NotificationType;
use crate::shell::http::router;
use crate::tests::fixtures::harness::TestHarness;
use crate::tests::fixtures::http::{request_as, send};
use crate::tests::fixtures::scheduling::monday_nine_am;

#[tokio::test]
async fn clocks_a_late_shift_through_overtime_denial() {
    let harness = TestHarness::new();
    let app = router(harness.app_state());

    harness.clock.set(monday_nine_am() - Duration::minutes(10));
    let (status, json) = send(
        app.clone(),
        request_as("GET", "/api/v1/time-clock/status", "emp-1", "EMPLOYEE", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["eligible_shift"]["id"], "shift-1");
    assert_eq!(json["eligible_shift"]["can_clock_in"], false);
    assert_eq!(json["earliest_clock_in_at"], "2025-03-10T12:55:00Z");

    let (status, _) = send(
        app.clone(),
        request_as("POST", "/api/v1/time-clock/clock-in", "emp-1", "EMPLOYEE", Some("{}")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    harness.clock.set(monday_nine_am() + Duration::minutes(7));
    let (status, clocked_in) = send(
        app.clone(),
        request_as("POST", "/api/v1/time-clock/clock-in", "emp-1", "EMPLOYEE", Some("{}")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(clocked_in["is_late"], true);
    assert_eq!(clocked_in["late_by_minutes"], 7);
    let late = harness.notifications.sent_to("manager-1").await;
    assert_eq!(late[0].notification_type, NotificationType::Warning);

    let (_, json) = send(
        app.clone(),
        request_as("GET", "/api/v1/time-clock/status", "emp-1", "EMPLOYEE", None),
    )
    .await;
    assert_eq!(json["active_entry"]["id"], clocked_in["id"]);

    let (status, json) = send(
        app.clone(),
        request_as("POST", "/api/v1/time-clock/clock-in", "emp-1", "EMPLOYEE", Some("{}")),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "You are already clocked in");

    harness.clock.set(monday_nine_am() + Duration::hours(9));
    let (status, json) = send(
        app.clone(),
        request_as("POST", "/api/v1/time-clock/clock-out", "emp-1", "EMPLOYEE", Some("{}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["needs_overtime_approval"], true);
    assert_eq!(json["status"], "PENDING_OVERTIME_APPROVAL");

    let (status, pending) = send(
        app.clone(),
        request_as("GET", "/api/v1/time-clock/overtime-requests", "manager-1", "MANAGER", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pending.as_array().map(Vec::len), Some(1));
    assert_eq!(pending[0]["overtime_hours"], 1.0);
    assert_eq!(pending[0]["employee"]["first_name"], "Emp-1");

    let id = clocked_in["id"].as_str().unwrap();
    let (status, denied) = send(
        app.clone(),
        request_as(
            "PUT",
            &format!("/api/v1/time-clock/overtime-requests/{id}/deny"),
            "manager-1",
            "MANAGER",
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(denied["clock_out_at"], "2025-03-10T21:00:00Z");
    assert_eq!(denied["status"], "CLOCKED_OUT");
    let reviewed = harness.notifications.sent_to("emp-1").await;
    assert_eq!(reviewed[0].notification_type, NotificationType::OvertimeDenied);

    let (status, week) = send(
        app,
        request_as("GET", "/api/v1/time-clock/my-week", "emp-1", "EMPLOYEE", None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(week["scheduled_hours"], 7.5);
    assert_eq!(week["actual_hours"], 7.88);
    assert_eq!(week["difference_hours"], 0.38);
    assert_eq!(week["late_clock_ins"], 1);
}

#[tokio::test]
async fn clocks_in_manually_and_out_again() {
    let harness = TestHarness::new();
    let app = router(harness.app_state());

    let (status, entry) = send(
        app.clone(),
        request_as(
            "POST",
            "/api/v1/time-clock/clock-in",
            "emp-2",
            "EMPLOYEE",
            Some(r#"{"force":true}"#),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(entry["shift_id"], serde_json::Value::Null);
    assert_eq!(entry["notes"], "Manual clock-in (force)");

    harness.clock.advance(Duration::hours(3));
    let body = format!(r#"{{"time_entry_id":"{}"}}"#, entry["id"].as_str().unwrap());
    let (status, json) = send(
        app,
        request_as("POST", "/api/v1/time-clock/clock-out", "emp-2", "EMPLOYEE", Some(&body)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["worked_minutes"], 180);
    assert_eq!(json["needs_overtime_approval"], false);
}
