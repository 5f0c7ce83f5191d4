#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockIn {
    pub time_entry_id: String,
    pub org_id: String,
    pub employee_id: String,
    /// Explicit shift to clock in against. Without it the best eligible shift is used.
    pub shift_id: Option<String>,
    /// With no shift id, skip shift resolution and clock in manually.
    pub force: bool,
}
