use crate::dto::dashboard_dto::CallRequest;
use crate::error::{Error, Result};
use crate::models::candidate::status;
use crate::services::scheduling;
use crate::utils::backend_url::resolve_backend_url;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::IntoResponse,
    Json,
};
use serde_json::json;

fn backend_base(state: &AppState, headers: &HeaderMap) -> String {
    let host = headers
        .get(header::HOST)
        .or_else(|| headers.get("x-forwarded-host"))
        .and_then(|v| v.to_str().ok());
    resolve_backend_url(state.backend_override.as_deref(), host)
}

/// `POST /api/call`: places an outbound confirmation call.
///
/// Ordering matters here: the alternative slots are computed first, then the
/// placement request goes out, and only a successful placement (a non-empty
/// execution id) flips the candidate to `calling` and rewrites the store.
/// A failed placement leaves the store file untouched.
pub async fn initiate_call(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<CallRequest>,
) -> Result<impl IntoResponse> {
    let mut data = state.store.load().await.map_err(|e| {
        tracing::error!(error = ?e, "Error reading store during call initiation");
        Error::Internal("Failed to initiate call".to_string())
    })?;

    let pos = data
        .candidates
        .iter()
        .position(|c| c.id == request.candidate_id)
        .ok_or_else(|| Error::NotFound("Candidate not found".to_string()))?;

    let alternative_slots =
        scheduling::alternative_slots(&data.candidates[pos], &data.available_slots);

    let base_url = backend_base(&state, &headers);
    let execution_id = state
        .voice
        .place_call(&base_url, &request)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, backend = %base_url, "Call placement failed");
            let cause = match e {
                Error::Internal(msg) => msg,
                other => other.to_string(),
            };
            Error::Internal(format!(
                "Failed to initiate call: {}. Make sure the voice backend is running on {}",
                cause, base_url
            ))
        })?;

    data.candidates[pos].status = status::CALLING.to_string();
    state.store.save(&data).await?;
    tracing::info!(
        candidate_id = request.candidate_id,
        execution_id = %execution_id,
        "Call initiated"
    );

    Ok(Json(json!({
        "success": true,
        "executionId": execution_id,
        "message": "Call initiated successfully",
        "alternativeSlots": alternative_slots,
    })))
}

/// `GET /api/call-status/:execution_id`: relays the voice backend's
/// execution details. An unreachable backend degrades to a synthetic
/// `unknown` status instead of an error so the polling UI keeps working.
pub async fn call_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(execution_id): Path<String>,
) -> Result<impl IntoResponse> {
    let base_url = backend_base(&state, &headers);

    match state.voice.execution_status(&base_url, &execution_id).await {
        Ok(details) => Ok(Json(json!({ "success": true, "details": details }))),
        Err(e) => {
            tracing::warn!(error = %e, %execution_id, "Call status lookup failed, degrading");
            let cause = match e {
                Error::Internal(msg) => msg,
                other => other.to_string(),
            };
            Ok(Json(json!({
                "success": true,
                "details": {
                    "executionId": execution_id,
                    "status": "unknown",
                    "error": format!("Could not fetch status: {}", cause),
                },
            })))
        }
    }
}
