// In memory time entry projection, watermark repository and query side.
//
// Purpose
// - Exercise projectors and read-side use cases without a database.
//
// Responsibilities
// - Store read model rows keyed by time entry id.
// - Track the last projected version per projector and stream.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::modules::time_clock::adapters::outbound::projections::{
    TimeEntryProjectionRepository, WatermarkRepository,
};
use crate::modules::time_clock::core::projections::{ClockOutPatch, TimeEntryRow};
use crate::modules::time_clock::core::state::{TimeEntry, TimeEntryStatus};
use crate::modules::time_clock::ports::TimeEntryQueries;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, TimeEntryRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: AtomicBool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        let offline = self.is_offline.get_mut();
        *offline = !*offline;
    }

    /// Takes a shared store down or brings it back.
    pub fn set_offline(&self, offline: bool) {
        self.is_offline.store(offline, Ordering::SeqCst);
    }

    fn offline(&self) -> bool {
        self.is_offline.load(Ordering::SeqCst)
    }

    async fn select(&self, keep: impl Fn(&TimeEntryRow) -> bool) -> anyhow::Result<Vec<TimeEntry>> {
        if self.offline() {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }
        let mut rows: Vec<TimeEntryRow> = self
            .rows
            .read()
            .await
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.clock_in_at
                .cmp(&b.clock_in_at)
                .then_with(|| a.time_entry_id.cmp(&b.time_entry_id))
        });
        Ok(rows.into_iter().map(TimeEntry::from).collect())
    }
}

#[async_trait]
impl TimeEntryProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        if self.offline() {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        guard.insert(row.time_entry_id.clone(), row);
        Ok(())
    }

    async fn patch(&self, time_entry_id: &str, patch: ClockOutPatch) -> anyhow::Result<()> {
        if self.offline() {
            return Err(anyhow::anyhow!("Projections repository offline"));
        }

        let mut guard = self.rows.write().await;
        let row = guard
            .get_mut(time_entry_id)
            .ok_or_else(|| anyhow::anyhow!("time entry row {time_entry_id} not projected"))?;
        row.clock_out_at = Some(patch.clock_out_at);
        row.status = patch.status;
        row.last_event_id = Some(patch.last_event_id);
        Ok(())
    }
}

#[async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        if self.offline() {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        if self.offline() {
            return Err(anyhow::anyhow!("Watermark repository offline"));
        }

        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn find_by_id(
        &self,
        org_id: &str,
        time_entry_id: &str,
    ) -> anyhow::Result<Option<TimeEntry>> {
        Ok(self
            .select(|row| row.org_id == org_id && row.time_entry_id == time_entry_id)
            .await?
            .into_iter()
            .next())
    }

    async fn list_for_employee_between(
        &self,
        org_id: &str,
        employee_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>> {
        self.select(|row| {
            row.org_id == org_id
                && row.employee_id == employee_id
                && row.clock_in_at >= from
                && row.clock_in_at < to
        })
        .await
    }

    async fn list_for_org_between(
        &self,
        org_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<TimeEntry>> {
        self.select(|row| row.org_id == org_id && row.clock_in_at >= from && row.clock_in_at < to)
            .await
    }

    async fn list_pending_overtime(&self, org_id: &str) -> anyhow::Result<Vec<TimeEntry>> {
        let mut entries = self
            .select(|row| {
                row.org_id == org_id
                    && row.status == TimeEntryStatus::PendingOvertimeApproval
                    && row.clock_out_at.is_some()
                    && row.scheduled_end.is_some()
            })
            .await?;
        entries.sort_by(|a, b| b.clock_out_at.cmp(&a.clock_out_at));
        Ok(entries)
    }
}
