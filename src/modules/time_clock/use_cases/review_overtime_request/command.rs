pub use crate::modules::time_clock::core::events::v1::overtime_reviewed::OvertimeDecision;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewOvertimeRequest {
    pub org_id: String,
    pub time_entry_id: String,
    pub decision: OvertimeDecision,
    pub reviewed_by: String,
}
