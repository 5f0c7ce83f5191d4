// Demo data for local runs with `SEED_DEMO_DATA=true`.

use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::modules::scheduling::adapters::outbound::scheduling_in_memory::{
    InMemoryScheduling, SchedulingError,
};
use crate::modules::scheduling::core::policy::OrgPolicy;
use crate::modules::scheduling::core::schedule_week::{ScheduleState, ScheduleWeek};
use crate::modules::scheduling::core::shift::{Shift, ShiftStatus, ShiftType};
use crate::modules::scheduling::core::user::{UserProfile, UserRole};
use crate::shared::core::timezone::{start_of_week, week_bounds};

pub const DEMO_ORG_ID: &str = "demo-org";
pub const DEMO_TIMEZONE: &str = "America/New_York";

const DEMO_USERS: [(&str, &str, &str, UserRole); 4] = [
    ("demo-admin", "Avery", "Admin", UserRole::Admin),
    ("demo-manager", "Morgan", "Manager", UserRole::Manager),
    ("demo-employee-1", "Jordan", "Lee", UserRole::Employee),
    ("demo-employee-2", "Riley", "Chen", UserRole::Employee),
];

/// One organization with a published week around `now`: weekday 09:00-17:00
/// shifts for both employees plus an open Saturday slot.
pub fn seed_demo_data(
    scheduling: &mut InMemoryScheduling,
    now: DateTime<Utc>,
) -> Result<(), SchedulingError> {
    let zone: Tz = chrono_tz::America::New_York;
    let first_day = start_of_week(now, zone);
    let (start_date, end_date) = week_bounds(first_day, zone);
    let week_id = format!("demo-week-{first_day}");

    scheduling
        .add_policy(OrgPolicy {
            org_id: DEMO_ORG_ID.into(),
            timezone: DEMO_TIMEZONE.into(),
            daily_otc_threshold: 8,
            weekly_otc_threshold: 40,
            clock_in_early_allowance_minutes: 5,
        })
        .add_week(ScheduleWeek {
            id: week_id.clone(),
            org_id: DEMO_ORG_ID.into(),
            start_date,
            end_date,
            state: ScheduleState::Published,
        });

    for (id, first_name, last_name, role) in DEMO_USERS {
        scheduling.add_user(UserProfile {
            id: id.into(),
            org_id: DEMO_ORG_ID.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: format!("{id}@example.com"),
            role,
            is_active: true,
        });
    }

    let nine_am = NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN);
    let mut slots = Vec::new();
    for day in 1..=5 {
        for employee in ["demo-employee-1", "demo-employee-2"] {
            slots.push((day, Some(employee)));
        }
    }
    slots.push((6, None));

    for (day, employee) in slots {
        let date = first_day + Duration::days(day);
        let Some(start) = zone.from_local_datetime(&date.and_time(nine_am)).earliest() else {
            continue;
        };
        let start = start.with_timezone(&Utc);
        scheduling.add_shift(Shift {
            id: format!("{week_id}-{day}-{}", employee.unwrap_or("open")),
            schedule_week_id: week_id.clone(),
            employee_id: employee.map(str::to_string),
            department_id: Some("demo-front-desk".into()),
            location_id: Some("demo-downtown".into()),
            start_time: start,
            end_time: start + Duration::hours(8),
            break_duration_minutes: 30,
            break_is_paid: false,
            shift_type: ShiftType::Regular,
            status: ShiftStatus::Scheduled,
        })?;
    }

    tracing::info!(org_id = DEMO_ORG_ID, %week_id, "seeded demo data");
    Ok(())
}
