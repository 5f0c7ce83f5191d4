use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleState {
    Draft,
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWeek {
    pub id: String,
    pub org_id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub state: ScheduleState,
}

impl ScheduleWeek {
    /// Both bounds inclusive, matching how the current week is looked up.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_date <= instant && instant <= self.end_date
    }
}
