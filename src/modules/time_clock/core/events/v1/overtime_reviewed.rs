use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OvertimeDecision {
    Approve,
    Deny,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct OvertimeReviewedV1 {
    pub time_entry_id: String,
    pub org_id: String,
    pub employee_id: String,
    pub decision: OvertimeDecision,
    /// Clock-out that stands after the review.
    pub clock_out_at: DateTime<Utc>,
    pub reviewed_by: String,
    pub reviewed_at: DateTime<Utc>,
}
