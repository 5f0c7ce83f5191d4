// In memory implementation of the EventStore port.
//
// Purpose
// - Support handler tests and local development without a database.
//
// Responsibilities
// - Store events per stream and enforce the expected version under one write lock.
// - Simulate an unreachable backend (`toggle_offline`) and slow appends
//   (`set_delay_append_ms`) so conflicts can be provoked in tests.

use crate::shared::infrastructure::event_store::{EventStore, EventStoreError, LoadedStream};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

pub struct InMemoryEventStore<Event: Clone + Send + Sync + 'static> {
    streams: RwLock<HashMap<String, Vec<Event>>>,
    delay_append_ms: AtomicU64,
    is_offline: bool,
}

impl<Event: Clone + Send + Sync + 'static> Default for InMemoryEventStore<Event> {
    fn default() -> Self {
        Self {
            streams: RwLock::new(HashMap::new()),
            delay_append_ms: AtomicU64::new(0),
            is_offline: false,
        }
    }
}

impl<Event: Clone + Send + Sync + 'static> InMemoryEventStore<Event> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_append_ms(&self, delay: u64) {
        self.delay_append_ms.store(delay, Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl<Event> EventStore<Event> for InMemoryEventStore<Event>
where
    Event: Clone + Send + Sync + 'static,
{
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        let guard = self.streams.read().await;
        let events = guard.get(stream_id).cloned().unwrap_or_default();
        let version = events.len() as i64;
        Ok(LoadedStream { events, version })
    }

    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        let delay = self.delay_append_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        let mut guard = self.streams.write().await;
        let stream = guard.entry(stream_id.to_string()).or_default();
        let actual = stream.len() as i64;
        if actual != expected_version {
            return Err(EventStoreError::VersionMismatch {
                expected: expected_version,
                actual,
            });
        }
        stream.extend_from_slice(new_events);
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_event_store_tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Tick(u32);

    #[rstest]
    #[tokio::test]
    async fn it_should_append_and_load_events_with_versions() {
        let store = InMemoryEventStore::<Tick>::new();
        store.append("clock-1", 0, &[Tick(1)]).await.unwrap();
        store.append("clock-1", 1, &[Tick(2), Tick(3)]).await.unwrap();

        let stream = store.load("clock-1").await.unwrap();
        assert_eq!(stream.version, 3);
        assert_eq!(stream.events, vec![Tick(1), Tick(2), Tick(3)]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_load_an_unknown_stream_as_empty() {
        let store = InMemoryEventStore::<Tick>::new();
        let stream = store.load("nobody").await.unwrap();
        assert_eq!(stream.version, 0);
        assert!(stream.events.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_a_stale_expected_version() {
        let store = InMemoryEventStore::<Tick>::new();
        store.append("clock-1", 0, &[Tick(1)]).await.unwrap();
        let result = store.append("clock-1", 0, &[Tick(2)]).await;
        assert_eq!(
            result,
            Err(EventStoreError::VersionMismatch {
                expected: 0,
                actual: 1
            })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_when_offline() {
        let mut store = InMemoryEventStore::<Tick>::new();
        store.toggle_offline();
        assert_eq!(
            store.load("clock-1").await.unwrap_err(),
            EventStoreError::Backend("Event store offline".into())
        );
    }
}
