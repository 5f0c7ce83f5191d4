use std::sync::Arc;

use crate::modules::scheduling::adapters::outbound::scheduling_in_memory::InMemoryScheduling;
use crate::modules::time_clock::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_clock::adapters::outbound::projector::Projector;
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::ports::TimeClockPorts;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::notifications::in_memory::InMemoryNotificationSink;
use crate::shell::state::AppState;
use crate::tests::fixtures::scheduling::{make_seeded_scheduling, monday_nine_am};

/// Adapters before they are shared, so tests can seed them or take them offline.
pub struct HarnessSetup {
    pub scheduling: InMemoryScheduling,
    pub event_store: InMemoryEventStore<TimeClockEvent>,
    pub projections: InMemoryProjections,
    pub notifications: InMemoryNotificationSink,
}

pub struct TestHarness {
    pub clock: Arc<FixedClock>,
    pub scheduling: Arc<InMemoryScheduling>,
    pub event_store: Arc<InMemoryEventStore<TimeClockEvent>>,
    pub projections: Arc<InMemoryProjections>,
    pub notifications: Arc<InMemoryNotificationSink>,
    pub ports: TimeClockPorts,
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHarness {
    /// Seeded scheduling data with the clock at Monday 09:00 New York.
    pub fn new() -> Self {
        Self::with(|_| {})
    }

    pub fn with(configure: impl FnOnce(&mut HarnessSetup)) -> Self {
        let mut setup = HarnessSetup {
            scheduling: make_seeded_scheduling(),
            event_store: InMemoryEventStore::new(),
            projections: InMemoryProjections::new(),
            notifications: InMemoryNotificationSink::new(),
        };
        configure(&mut setup);

        let clock = Arc::new(FixedClock::new(monday_nine_am()));
        let scheduling = Arc::new(setup.scheduling);
        let event_store = Arc::new(setup.event_store);
        let projections = Arc::new(setup.projections);
        let notifications = Arc::new(setup.notifications);
        let projector = Arc::new(Projector::new(
            "time_entries",
            projections.clone(),
            projections.clone(),
        ));

        let ports = TimeClockPorts {
            event_store: event_store.clone(),
            projector,
            queries: projections.clone(),
            organizations: scheduling.clone(),
            shifts: scheduling.clone(),
            weeks: scheduling.clone(),
            directory: scheduling.clone(),
            notifications: notifications.clone(),
            clock: clock.clone(),
        };

        Self {
            clock,
            scheduling,
            event_store,
            projections,
            notifications,
            ports,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.ports.clone())
    }
}
