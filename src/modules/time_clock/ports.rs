// Everything a time clock use case reaches outside of its pure decider.
//
// Purpose
// - One cloneable bundle of trait objects, built once in the shell and shared
//   by every handler.
//
// Testing guidance
// - `tests::fixtures::harness::TestHarness` wires in-memory adapters and a
//   `FixedClock` into a `TimeClockPorts`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::modules::scheduling::ports::{
    OrganizationRepository, ScheduleWeekRepository, ShiftRepository, UserDirectory,
};
use crate::modules::time_clock::adapters::outbound::projector::Projector;
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::state::TimeEntry;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::notifications::NotificationSink;

/// Read side of the time entry projection.
#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    async fn find_by_id(&self, org_id: &str, time_entry_id: &str)
    -> anyhow::Result<Option<TimeEntry>>;

    /// Entries of one employee with `clock_in_at` in `[from, to)`, oldest first.
    async fn list_for_employee_between(
        &self,
        org_id: &str,
        employee_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>>;

    /// Entries of the organization with `clock_in_at` in `[from, to)`, oldest first.
    async fn list_for_org_between(
        &self,
        org_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>>;

    /// Entries awaiting an overtime review, most recent clock-out first.
    async fn list_pending_overtime(&self, org_id: &str) -> anyhow::Result<Vec<TimeEntry>>;
}

#[derive(Clone)]
pub struct TimeClockPorts {
    pub event_store: Arc<dyn EventStore<TimeClockEvent>>,
    pub projector: Arc<Projector>,
    pub queries: Arc<dyn TimeEntryQueries>,
    pub organizations: Arc<dyn OrganizationRepository>,
    pub shifts: Arc<dyn ShiftRepository>,
    pub weeks: Arc<dyn ScheduleWeekRepository>,
    pub directory: Arc<dyn UserDirectory>,
    pub notifications: Arc<dyn NotificationSink>,
    pub clock: Arc<dyn Clock>,
}
