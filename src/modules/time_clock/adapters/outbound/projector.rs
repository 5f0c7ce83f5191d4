// Projector consumes time clock events, translates them into mutations,
// persists them using a repository, and advances a watermark per stream.
// Replaying a version at or below the watermark is a no-op.

use std::sync::Arc;

use anyhow::Context;

use crate::modules::time_clock::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_clock::core::events::TimeClockEvent;
use crate::modules::time_clock::core::projections::{Mutation, apply};

pub struct Projector {
    pub name: String,
    pub repository: Arc<dyn TimeEntryProjectionRepository>,
    pub watermark_repository: Arc<dyn WatermarkRepository>,
}

impl Projector {
    pub fn new(
        name: impl Into<String>,
        repository: Arc<dyn TimeEntryProjectionRepository>,
        watermark_repository: Arc<dyn WatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository,
        }
    }

    /// Last version of `stream_id` this projector has applied, 0 when none.
    pub async fn position(&self, stream_id: &str) -> anyhow::Result<i64> {
        let key = self.watermark_key(stream_id);
        match self.watermark_repository.get(&key).await? {
            Some(last) => last
                .parse()
                .with_context(|| format!("invalid watermark {last:?} for {key}")),
            None => Ok(0),
        }
    }

    /// Applies one event unless the stream watermark is already at or past `version`.
    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeClockEvent,
    ) -> anyhow::Result<()> {
        if version <= self.position(stream_id).await? {
            return Ok(());
        }
        self.project(stream_id, version, event).await
    }

    /// Projects every event of a stream above its watermark, in order.
    /// `events` is the whole stream starting at version 1.
    pub async fn catch_up(
        &self,
        stream_id: &str,
        events: &[TimeClockEvent],
    ) -> anyhow::Result<i64> {
        let mut version = self.position(stream_id).await?;
        let applied = usize::try_from(version).unwrap_or(0);
        for event in events.iter().skip(applied) {
            version += 1;
            self.project(stream_id, version, event).await?;
        }
        Ok(version)
    }

    async fn project(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeClockEvent,
    ) -> anyhow::Result<()> {
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch {
                    time_entry_id,
                    patch,
                } => self.repository.patch(&time_entry_id, patch).await?,
            }
        }
        self.watermark_repository
            .set(&self.watermark_key(stream_id), &version.to_string())
            .await?;
        Ok(())
    }

    fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}:{stream_id}", self.name)
    }
}
