use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    Regular,
    OnCall,
    Overtime,
    DoubleOvertime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftStatus {
    Scheduled,
    Swapped,
    CancellationRequested,
}

/// A scheduled work interval. `employee_id == None` is an open slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    pub id: String,
    pub schedule_week_id: String,
    pub employee_id: Option<String>,
    pub department_id: Option<String>,
    pub location_id: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub break_duration_minutes: u32,
    pub break_is_paid: bool,
    pub shift_type: ShiftType,
    pub status: ShiftStatus,
}

impl Shift {
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn has_valid_interval(&self) -> bool {
        self.end_time > self.start_time
    }

    pub fn is_assigned_to(&self, employee_id: &str) -> bool {
        self.employee_id.as_deref() == Some(employee_id)
    }
}
