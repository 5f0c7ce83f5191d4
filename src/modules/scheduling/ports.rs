// Read ports onto the scheduling data owned by the surrounding application.
//
// Purpose
// - Organizations, shifts, schedule weeks and users are persisted elsewhere. The
//   time clock and overtime engine only read them through these traits.
//
// Testing guidance
// - `InMemoryScheduling` implements every trait here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::scheduling::core::schedule_week::ScheduleWeek;
use crate::modules::scheduling::core::shift::Shift;
use crate::modules::scheduling::core::user::UserProfile;

#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn find_policy(&self, org_id: &str) -> anyhow::Result<Option<OrgPolicy>>;
}

#[async_trait]
pub trait ShiftRepository: Send + Sync {
    /// The shift `shift_id` if it is assigned to `employee_id` within `org_id`.
    async fn find_for_employee(
        &self,
        org_id: &str,
        employee_id: &str,
        shift_id: &str,
    ) -> anyhow::Result<Option<Shift>>;

    /// Shifts of the employee with `end_time >= ends_at_or_after` and
    /// `start_time <= starts_at_or_before`, ascending by start, at most `limit`.
    async fn list_overlapping_for_employee(
        &self,
        org_id: &str,
        employee_id: &str,
        ends_at_or_after: DateTime<Utc>,
        starts_at_or_before: DateTime<Utc>,
        limit: usize,
    ) -> anyhow::Result<Vec<Shift>>;

    /// Shifts of the employee whose `start_time` lies in `[from, to)`.
    async fn list_starting_between_for_employee(
        &self,
        org_id: &str,
        employee_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> anyhow::Result<Vec<Shift>>;

    async fn list_for_week(&self, schedule_week_id: &str) -> anyhow::Result<Vec<Shift>>;
}

#[async_trait]
pub trait ScheduleWeekRepository: Send + Sync {
    async fn find(&self, org_id: &str, week_id: &str) -> anyhow::Result<Option<ScheduleWeek>>;

    async fn find_containing(
        &self,
        org_id: &str,
        instant: DateTime<Utc>,
    ) -> anyhow::Result<Option<ScheduleWeek>>;
}

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_user(&self, org_id: &str, user_id: &str) -> anyhow::Result<Option<UserProfile>>;

    /// Active ADMIN and MANAGER users of the organization.
    async fn list_active_managers(&self, org_id: &str) -> anyhow::Result<Vec<UserProfile>>;
}
