use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::modules::scheduling::adapters::outbound::scheduling_in_memory::InMemoryScheduling;
use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::scheduling::core::schedule_week::{ScheduleState, ScheduleWeek};
use crate::modules::scheduling::core::shift::{Shift, ShiftStatus, ShiftType};
use crate::modules::scheduling::core::user::{UserProfile, UserRole};
use crate::shared::core::timezone::{resolve_zone, week_bounds};

/// Monday 2025-03-10, 09:00 in New York (EDT).
pub fn monday_nine_am() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, 13, 0, 0).unwrap()
}

pub fn week_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
}

pub fn make_policy() -> OrgPolicy {
    OrgPolicy {
        org_id: "org-1".into(),
        timezone: "America/New_York".into(),
        daily_otc_threshold: 8,
        weekly_otc_threshold: 40,
        clock_in_early_allowance_minutes: 5,
    }
}

/// The local week Sunday 2025-03-09 to Sunday 2025-03-16 in New York.
pub fn make_week(id: &str, org_id: &str) -> ScheduleWeek {
    let (start_date, end_date) = week_bounds(week_start_date(), resolve_zone("America/New_York"));
    ScheduleWeek {
        id: id.into(),
        org_id: org_id.into(),
        start_date,
        end_date,
        state: ScheduleState::Published,
    }
}

pub fn make_user(id: &str, role: UserRole) -> UserProfile {
    let mut first_name = id.to_string();
    if let Some(first) = first_name.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    UserProfile {
        id: id.into(),
        org_id: "org-1".into(),
        first_name,
        last_name: "Tester".into(),
        email: format!("{id}@example.com"),
        role,
        is_active: true,
    }
}

/// org-1 with its policy, week-1, emp-1, emp-2 and manager-1, and shift-1
/// (Monday 09:00-17:00, 30 min break) assigned to emp-1.
pub fn make_seeded_scheduling() -> InMemoryScheduling {
    let mut scheduling = InMemoryScheduling::new();
    scheduling
        .add_policy(make_policy())
        .add_week(make_week("week-1", "org-1"))
        .add_user(make_user("emp-1", UserRole::Employee))
        .add_user(make_user("emp-2", UserRole::Employee))
        .add_user(make_user("manager-1", UserRole::Manager));
    scheduling
        .add_shift(ShiftBuilder::new("shift-1").break_minutes(30).build())
        .unwrap();
    scheduling
}

pub struct ShiftBuilder {
    inner: Shift,
}

#[allow(dead_code)]
impl ShiftBuilder {
    /// An eight hour REGULAR shift of emp-1 starting Monday 09:00 local, in week-1.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: Shift {
                id: id.into(),
                schedule_week_id: "week-1".into(),
                employee_id: Some("emp-1".into()),
                department_id: Some("dept-front".into()),
                location_id: Some("loc-main".into()),
                start_time: monday_nine_am(),
                end_time: monday_nine_am() + Duration::hours(8),
                break_duration_minutes: 0,
                break_is_paid: false,
                shift_type: ShiftType::Regular,
                status: ShiftStatus::Scheduled,
            },
        }
    }

    /// Moves the shift, keeping its length.
    pub fn starting_at(mut self, start: DateTime<Utc>) -> Self {
        let length = self.inner.duration();
        self.inner.start_time = start;
        self.inner.end_time = start + length;
        self
    }

    pub fn lasting(mut self, length: Duration) -> Self {
        self.inner.end_time = self.inner.start_time + length;
        self
    }

    pub fn ending_at(mut self, end: DateTime<Utc>) -> Self {
        self.inner.end_time = end;
        self
    }

    pub fn week(mut self, schedule_week_id: impl Into<String>) -> Self {
        self.inner.schedule_week_id = schedule_week_id.into();
        self
    }

    pub fn employee(mut self, employee_id: Option<&str>) -> Self {
        self.inner.employee_id = employee_id.map(str::to_string);
        self
    }

    pub fn department(mut self, department_id: Option<&str>) -> Self {
        self.inner.department_id = department_id.map(str::to_string);
        self
    }

    pub fn location(mut self, location_id: Option<&str>) -> Self {
        self.inner.location_id = location_id.map(str::to_string);
        self
    }

    pub fn break_minutes(mut self, minutes: u32) -> Self {
        self.inner.break_duration_minutes = minutes;
        self
    }

    pub fn shift_type(mut self, shift_type: ShiftType) -> Self {
        self.inner.shift_type = shift_type;
        self
    }

    pub fn build(self) -> Shift {
        self.inner
    }
}
