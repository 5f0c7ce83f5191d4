use chrono::{DateTime, Utc};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ClockedOutV1 {
    pub time_entry_id: String,
    pub org_id: String,
    pub employee_id: String,
    pub clock_out_at: DateTime<Utc>,
    /// Set when the clock-out fell after the scheduled end of the shift.
    pub needs_overtime_approval: bool,
}
