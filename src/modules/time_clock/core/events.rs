pub mod v1 {
    pub mod clocked_in;
    pub mod clocked_out;
    pub mod overtime_reviewed;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeClockEvent {
    ClockedInV1(v1::clocked_in::ClockedInV1),
    ClockedOutV1(v1::clocked_out::ClockedOutV1),
    OvertimeReviewedV1(v1::overtime_reviewed::OvertimeReviewedV1),
}

impl TimeClockEvent {
    pub fn time_entry_id(&self) -> &str {
        match self {
            TimeClockEvent::ClockedInV1(e) => &e.time_entry_id,
            TimeClockEvent::ClockedOutV1(e) => &e.time_entry_id,
            TimeClockEvent::OvertimeReviewedV1(e) => &e.time_entry_id,
        }
    }
}

/// One stream per employee; appends to it are serialized by the event store.
pub fn time_clock_stream_id(org_id: &str, employee_id: &str) -> String {
    format!("TimeClock-{org_id}-{employee_id}")
}
