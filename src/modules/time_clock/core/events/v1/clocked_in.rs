use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockedInV1 {
    pub time_entry_id: String,
    pub org_id: String,
    pub employee_id: String,
    pub shift_id: Option<String>,
    pub clock_in_at: DateTime<Utc>,
    pub scheduled_start: Option<DateTime<Utc>>,
    pub scheduled_end: Option<DateTime<Utc>>,
    pub is_late: bool,
    pub late_by_minutes: u32,
    pub notes: Option<String>,
}
