use crate::models::candidate::InterviewSlot;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/call`. The same shape is forwarded verbatim to the
/// voice backend's call-placement endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub candidate_id: i64,
    pub phone: String,
    pub name: String,
    pub interview_date: String,
    pub interview_time: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCandidatePayload {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub position: String,
    pub scheduled_interview: InterviewSlot,
    pub application_date: Option<String>,
    pub rescheduling_slots: Option<Vec<i64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReschedulingSlotsPayload {
    #[serde(default)]
    pub rescheduling_slots: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub exclude: Option<String>,
}
