use crate::modules::time_clock::core::projections::{ClockOutPatch, TimeEntryRow};
use async_trait::async_trait;

#[async_trait]
pub trait TimeEntryProjectionRepository: Send + Sync {
    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()>;
    async fn patch(&self, time_entry_id: &str, patch: ClockOutPatch) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
