use tokio::join;

use crate::modules::time_clock::core::events::time_clock_stream_id;
use crate::modules::time_clock::ports::TimeEntryQueries;
use crate::modules::time_clock::use_cases::application_error::ApplicationError;
use crate::modules::time_clock::use_cases::clock_in::handler::ClockInHandler;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::tests::fixtures::commands::clock_in::ClockInBuilder;
use crate::tests::fixtures::harness::TestHarness;
use crate::tests::fixtures::scheduling::monday_nine_am;

#[tokio::test]
async fn accepts_only_one_of_two_simultaneous_clock_ins() {
    let harness = TestHarness::new();
    harness.event_store.set_delay_append_ms(10);
    let first = ClockInHandler::new(harness.ports.clone());
    let second = ClockInHandler::new(harness.ports.clone());

    let (result1, result2) = join!(
        first.handle(ClockInBuilder::new().time_entry_id("te-a").build()),
        second.handle(ClockInBuilder::new().time_entry_id("te-b").build())
    );

    assert!(
        result1.is_ok() ^ result2.is_ok(),
        "exactly one should fail with conflict"
    );
    match result1.err().or(result2.err()).unwrap() {
        ApplicationError::VersionConflict(EventStoreError::VersionMismatch { expected, actual }) => {
            assert_eq!(expected, 0);
            assert_eq!(actual, 1);
        }
        e => panic!("unexpected error: {e:?}"),
    }

    let stream = harness
        .event_store
        .load(&time_clock_stream_id("org-1", "emp-1"))
        .await
        .unwrap();
    assert_eq!(stream.version, 1);
    let entries = harness
        .projections
        .list_for_employee_between(
            "org-1",
            "emp-1",
            monday_nine_am(),
            monday_nine_am() + chrono::Duration::days(1),
        )
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn clocks_in_different_employees_independently() {
    let harness = TestHarness::new();
    harness.event_store.set_delay_append_ms(10);
    let handler = ClockInHandler::new(harness.ports.clone());

    let (result1, result2) = join!(
        handler.handle(ClockInBuilder::new().time_entry_id("te-a").build()),
        handler.handle(
            ClockInBuilder::new()
                .time_entry_id("te-b")
                .employee_id("emp-2")
                .build()
        )
    );

    assert!(result1.is_ok());
    assert!(result2.is_ok());
}
