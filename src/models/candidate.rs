use serde::{Deserialize, Serialize};

/// Documented candidate statuses. The store carries the status as a plain
/// string and the external call-outcome processor writes its own values, so
/// no transition guard is enforced anywhere.
pub mod status {
    pub const PENDING: &str = "pending";
    pub const CALLING: &str = "calling";
    pub const CONFIRMED: &str = "confirmed";
    pub const DECLINED: &str = "declined";
    pub const RESCHEDULED: &str = "rescheduled";
    pub const NO_ANSWER: &str = "no_answer";
}

/// An interview time, stored denormalized: `datetime` is the display string
/// built as `"{date} at {time}"` when the record is created and never
/// re-derived afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSlot {
    pub date: String,
    pub time: String,
    pub day: String,
    pub datetime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub position: String,
    pub status: String,
    pub scheduled_interview: InterviewSlot,
    /// Set by the external outcome processor when a call reschedules the
    /// interview; cleared again on reset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_interview: Option<InterviewSlot>,
    /// Slot ids offered to this candidate as reschedule alternatives.
    /// Duplicates and slots shared with other candidates are allowed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rescheduling_slots: Option<Vec<i64>>,
    pub application_date: String,
}

/// Reference data seeded once in the store; never created, removed or locked
/// by this service. The same slot may be offered to several candidates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlot {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub day: String,
    pub datetime: String,
}

/// The whole persisted document. Read and rewritten in full on every
/// operation; there is no partial update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleData {
    pub candidates: Vec<Candidate>,
    pub available_slots: Vec<AvailableSlot>,
}
