// In memory implementation of every scheduling read port.
//
// Purpose
// - Back tests, local development and the demo seed without a database.
//
// Responsibilities
// - Seed through `&mut self` before the store is shared.
// - Reject shifts that end before they start or point at an unknown week.
// - Scope shifts to an organization through their schedule week.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::scheduling::core::schedule_week::ScheduleWeek;
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::core::user::UserProfile;
use crate::modules::scheduling::ports::{
    OrganizationRepository, ScheduleWeekRepository, ShiftRepository, UserDirectory,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("shift {0} must end after it starts")]
    InvalidShiftInterval(String),

    #[error("shift {shift_id} references unknown schedule week {week_id}")]
    UnknownScheduleWeek { shift_id: String, week_id: String },
}

#[derive(Default)]
pub struct InMemoryScheduling {
    policies: RwLock<HashMap<String, OrgPolicy>>,
    weeks: RwLock<Vec<ScheduleWeek>>,
    shifts: RwLock<Vec<Shift>>,
    users: RwLock<HashMap<String, UserProfile>>,
    is_offline: bool,
}

impl InMemoryScheduling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn add_policy(&mut self, policy: OrgPolicy) -> &mut Self {
        self.policies
            .get_mut()
            .insert(policy.org_id.clone(), policy);
        self
    }

    pub fn add_week(&mut self, week: ScheduleWeek) -> &mut Self {
        self.weeks.get_mut().push(week);
        self
    }

    pub fn add_user(&mut self, user: UserProfile) -> &mut Self {
        self.users.get_mut().insert(user.id.clone(), user);
        self
    }

    pub fn add_shift(&mut self, shift: Shift) -> Result<&mut Self, SchedulingError> {
        if !shift.has_valid_interval() {
            return Err(SchedulingError::InvalidShiftInterval(shift.id));
        }
        if !self
            .weeks
            .get_mut()
            .iter()
            .any(|week| week.id == shift.schedule_week_id)
        {
            return Err(SchedulingError::UnknownScheduleWeek {
                shift_id: shift.id,
                week_id: shift.schedule_week_id,
            });
        }
        self.shifts.get_mut().push(shift);
        Ok(self)
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Scheduling repository offline"));
        }
        Ok(())
    }

    async fn shifts_in_org(&self, org_id: &str) -> Vec<Shift> {
        let weeks = self.weeks.read().await;
        self.shifts
            .read()
            .await
            .iter()
            .filter(|shift| {
                weeks
                    .iter()
                    .any(|week| week.id == shift.schedule_week_id && week.org_id == org_id)
            })
            .cloned()
            .collect()
    }
}

#[async_trait]
impl OrganizationRepository for InMemoryScheduling {
    async fn find_policy(&self, org_id: &str) -> anyhow::Result<Option<OrgPolicy>> {
        self.ensure_online()?;
        Ok(self.policies.read().await.get(org_id).cloned())
    }
}

#[async_trait]
impl ShiftRepository for InMemoryScheduling {
    async fn find_for_employee(
        &self,
        org_id: &str,
        employee_id: &str,
        shift_id: &str,
    ) -> anyhow::Result<Option<Shift>> {
        self.ensure_online()?;
        Ok(self
            .shifts_in_org(org_id)
            .await
            .into_iter()
            .find(|shift| shift.id == shift_id && shift.is_assigned_to(employee_id)))
    }

    async fn list_overlapping_for_employee(
        &self,
        org_id: &str,
        employee_id: &str,
        ends_at_or_after: DateTime<Utc>,
        starts_at_or_before: DateTime<Utc>,
        limit: usize,
    ) -> anyhow::Result<Vec<Shift>> {
        self.ensure_online()?;
        let mut shifts: Vec<Shift> = self
            .shifts_in_org(org_id)
            .await
            .into_iter()
            .filter(|shift| {
                shift.is_assigned_to(employee_id)
                    && shift.end_time >= ends_at_or_after
                    && shift.start_time <= starts_at_or_before
            })
            .collect();
        shifts.sort_by_key(|shift| shift.start_time);
        shifts.truncate(limit);
        Ok(shifts)
    }

    async fn list_starting_between_for_employee(
        &self,
        org_id: &str,
        employee_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Shift>> {
        self.ensure_online()?;
        Ok(self
            .shifts_in_org(org_id)
            .await
            .into_iter()
            .filter(|shift| {
                shift.is_assigned_to(employee_id)
                    && shift.start_time >= from
                    && shift.start_time < to
            })
            .collect())
    }

    async fn list_for_week(&self, schedule_week_id: &str) -> anyhow::Result<Vec<Shift>> {
        self.ensure_online()?;
        Ok(self
            .shifts
            .read()
            .await
            .iter()
            .filter(|shift| shift.schedule_week_id == schedule_week_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ScheduleWeekRepository for InMemoryScheduling {
    async fn find(&self, org_id: &str, week_id: &str) -> anyhow::Result<Option<ScheduleWeek>> {
        self.ensure_online()?;
        Ok(self
            .weeks
            .read()
            .await
            .iter()
            .find(|week| week.id == week_id && week.org_id == org_id)
            .cloned())
    }

    async fn find_containing(
        &self,
        org_id: &str,
        instant: DateTime<Utc>,
    ) -> anyhow::Result<Option<ScheduleWeek>> {
        self.ensure_online()?;
        Ok(self
            .weeks
            .read()
            .await
            .iter()
            .filter(|week| week.org_id == org_id && week.contains(instant))
            .max_by_key(|week| week.start_date)
            .cloned())
    }
}

#[async_trait]
impl UserDirectory for InMemoryScheduling {
    async fn find_user(&self, org_id: &str, user_id: &str) -> anyhow::Result<Option<UserProfile>> {
        self.ensure_online()?;
        Ok(self
            .users
            .read()
            .await
            .get(user_id)
            .filter(|user| user.org_id == org_id)
            .cloned())
    }

    async fn list_active_managers(&self, org_id: &str) -> anyhow::Result<Vec<UserProfile>> {
        self.ensure_online()?;
        let mut managers: Vec<UserProfile> = self
            .users
            .read()
            .await
            .values()
            .filter(|user| user.org_id == org_id && user.is_active && user.role.is_manager())
            .cloned()
            .collect();
        managers.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(managers)
    }
}
