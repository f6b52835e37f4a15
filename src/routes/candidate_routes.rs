use crate::dto::dashboard_dto::{
    AddCandidatePayload, SlotsQuery, UpdateReschedulingSlotsPayload,
};
use crate::error::{Error, Result};
use crate::models::candidate::{status, Candidate};
use crate::store::json_store::ScheduleStore;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::collections::HashMap;
use validator::Validate;

/// `GET /api/candidates`: the whole store document. The dashboard polls this
/// endpoint continuously, so the response is marked uncacheable.
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let data = state.store.load().await.map_err(|e| {
        tracing::error!(error = ?e, "Error reading candidates store");
        Error::Internal("Failed to fetch candidates".to_string())
    })?;

    let mut status_counts: HashMap<&str, usize> = HashMap::new();
    for candidate in &data.candidates {
        *status_counts.entry(candidate.status.as_str()).or_default() += 1;
    }
    tracing::info!(candidates = data.candidates.len(), ?status_counts, "Serving candidate list");

    let headers = [
        (
            header::CACHE_CONTROL,
            "no-store, no-cache, must-revalidate, proxy-revalidate",
        ),
        (header::PRAGMA, "no-cache"),
        (header::EXPIRES, "0"),
    ];
    Ok((headers, Json(data)))
}

/// `GET /api/available-slots?exclude=<datetime>`: slot list, optionally
/// dropping exact-string matches on `datetime`.
pub async fn available_slots(
    State(state): State<AppState>,
    Query(query): Query<SlotsQuery>,
) -> Result<impl IntoResponse> {
    let data = state.store.load().await.map_err(|e| {
        tracing::error!(error = ?e, "Error reading slots from store");
        Error::Internal("Failed to fetch available slots".to_string())
    })?;

    let mut slots = data.available_slots;
    if let Some(exclude) = query.exclude.filter(|e| !e.is_empty()) {
        slots.retain(|slot| slot.datetime != exclude);
    }

    Ok(Json(json!({ "success": true, "slots": slots })))
}

/// `POST /api/candidate/add`
pub async fn add_candidate(
    State(state): State<AppState>,
    Json(payload): Json<AddCandidatePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let mut data = state.store.load().await?;
    let id = ScheduleStore::next_id(&data);

    let candidate = Candidate {
        id,
        name: payload.name,
        phone: payload.phone,
        email: payload.email,
        position: payload.position,
        status: status::PENDING.to_string(),
        scheduled_interview: payload.scheduled_interview,
        original_interview: None,
        rescheduling_slots: Some(payload.rescheduling_slots.unwrap_or_default()),
        application_date: payload
            .application_date
            .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string()),
    };
    tracing::info!(id, name = %candidate.name, "Adding candidate");

    data.candidates.push(candidate);
    state.store.save(&data).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Candidate added successfully",
        "candidate_id": id,
    })))
}

/// `DELETE /api/candidate/:id`
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let removed = state.store.delete_candidate(id).await?;
    tracing::info!(id, name = %removed.name, "Deleted candidate");

    Ok(Json(json!({
        "success": true,
        "message": format!("Candidate {} deleted successfully", removed.name),
    })))
}

/// `POST /api/candidate/:id/reset`: back to `pending`, with any leftover
/// `originalInterview` stripped so the record is indistinguishable from a
/// freshly added candidate. Assigned rescheduling slots are recruiter
/// configuration, not a reschedule artifact, and survive the reset.
pub async fn reset_candidate(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let mut candidate = state.store.get_candidate(id).await?;
    let old_status = candidate.status.clone();

    candidate.status = status::PENDING.to_string();
    candidate.original_interview = None;
    state.store.upsert_candidate(candidate).await?;
    tracing::info!(id, %old_status, "Reset candidate status to pending");

    Ok(Json(json!({
        "success": true,
        "message": format!("Candidate {} status reset to pending", id),
    })))
}

/// `POST /api/reset-statuses`: bulk reset of every candidate.
pub async fn reset_all_statuses(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let mut data = state.store.load().await?;

    let mut reset_count = 0;
    for candidate in &mut data.candidates {
        if candidate.status != status::PENDING {
            candidate.status = status::PENDING.to_string();
            reset_count += 1;
        }
        candidate.original_interview = None;
    }
    state.store.save(&data).await?;
    tracing::info!(reset_count, "Reset candidate statuses to pending");

    Ok(Json(json!({
        "success": true,
        "message": format!("Reset {} candidate statuses to pending", reset_count),
        "reset_count": reset_count,
    })))
}

/// `PUT /api/candidate/:id/rescheduling-slots`: replaces the candidate's
/// assigned alternatives. Ids must exist in `availableSlots`; duplicates are
/// accepted as sent.
pub async fn update_rescheduling_slots(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReschedulingSlotsPayload>,
) -> Result<impl IntoResponse> {
    let mut data = state.store.load().await?;

    let pos = data
        .candidates
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;

    let invalid: Vec<i64> = payload
        .rescheduling_slots
        .iter()
        .copied()
        .filter(|slot_id| !data.available_slots.iter().any(|s| s.id == *slot_id))
        .collect();
    if !invalid.is_empty() {
        return Err(Error::BadRequest(format!("Invalid slot IDs: {:?}", invalid)));
    }

    data.candidates[pos].rescheduling_slots = Some(payload.rescheduling_slots.clone());

    state.store.save(&data).await?;
    tracing::info!(id, slots = ?payload.rescheduling_slots, "Updated rescheduling slots");

    Ok(Json(json!({
        "success": true,
        "message": format!("Rescheduling slots updated for candidate {}", id),
        "reschedulingSlots": payload.rescheduling_slots,
    })))
}
