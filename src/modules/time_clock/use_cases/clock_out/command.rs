/// At most one of `time_entry_id` and `shift_id` may be given. With neither, the
/// employee's most recent open entry is closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockOut {
    pub org_id: String,
    pub employee_id: String,
    pub time_entry_id: Option<String>,
    pub shift_id: Option<String>,
}
