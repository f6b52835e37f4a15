use crate::dto::dashboard_dto::CallRequest;
use crate::error::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaceCallResponse {
    success: bool,
    execution_id: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallStatusResponse {
    success: bool,
    details: Option<JsonValue>,
    error: Option<String>,
}

/// HTTP client for the external voice-calling backend. This service never
/// talks to the voice-AI vendor itself; the backend owns call execution,
/// status tracking and outcome parsing.
#[derive(Clone)]
pub struct VoiceService {
    client: Client,
}

impl VoiceService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Places an outbound call and returns the backend's execution id.
    /// Any transport failure or backend-reported error is a hard failure;
    /// the caller decides what, if anything, to persist.
    pub async fn place_call(&self, base_url: &str, request: &CallRequest) -> Result<String> {
        info!(
            candidate_id = request.candidate_id,
            backend = base_url,
            "Placing call via voice backend"
        );

        let response = self
            .client
            .post(format!("{}/api/call", base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Internal(e.to_string()))?;

        let status = response.status();
        let body: PlaceCallResponse = response
            .json()
            .await
            .map_err(|_| Error::Internal(format!("Voice backend error: {}", status)))?;

        if !status.is_success() || !body.success {
            return Err(Error::Internal(
                body.error
                    .unwrap_or_else(|| format!("Voice backend error: {}", status)),
            ));
        }

        body.execution_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| Error::Internal("Voice backend returned no execution id".to_string()))
    }

    /// Fetches execution details for a placed call. The backend's `details`
    /// value (`status`, `duration`, `parsed_outcome`, ...) is relayed
    /// untouched; interpretation belongs to the caller.
    pub async fn execution_status(&self, base_url: &str, execution_id: &str) -> Result<JsonValue> {
        let response = self
            .client
            .get(format!("{}/api/call-status/{}", base_url, execution_id))
            .send()
            .await
            .map_err(|e| Error::Internal(e.to_string()))?;

        let status = response.status();
        let body: CallStatusResponse = response
            .json()
            .await
            .map_err(|_| Error::Internal(format!("Voice backend error: {}", status)))?;

        if !status.is_success() || !body.success {
            return Err(Error::Internal(
                body.error
                    .unwrap_or_else(|| format!("Voice backend error: {}", status)),
            ));
        }

        body.details
            .ok_or_else(|| Error::Internal("Voice backend returned no details".to_string()))
    }
}
