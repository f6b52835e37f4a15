pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod utils;

use crate::services::voice_service::VoiceService;
use crate::store::json_store::ScheduleStore;
use axum::{
    routing::{get, post, put},
    Router,
};
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub store: ScheduleStore,
    pub voice: VoiceService,
    /// Explicit voice-backend URL; when `None` the URL is inferred per
    /// request from the host header.
    pub backend_override: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        Self::from_parts(
            ScheduleStore::new(&config.data_file),
            config.voice_backend_url.clone(),
        )
    }

    pub fn from_parts(store: ScheduleStore, backend_override: Option<String>) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        Self {
            store,
            voice: VoiceService::new(http_client),
            backend_override,
        }
    }
}

/// The full API surface. Shared between `main` and the integration tests.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/candidates", get(routes::candidate_routes::list_candidates))
        .route(
            "/api/available-slots",
            get(routes::candidate_routes::available_slots),
        )
        .route("/api/call", post(routes::call_routes::initiate_call))
        .route(
            "/api/call-status/:execution_id",
            get(routes::call_routes::call_status),
        )
        .route(
            "/api/candidate/add",
            post(routes::candidate_routes::add_candidate),
        )
        .route(
            "/api/candidate/:id",
            axum::routing::delete(routes::candidate_routes::delete_candidate),
        )
        .route(
            "/api/candidate/:id/reset",
            post(routes::candidate_routes::reset_candidate),
        )
        .route(
            "/api/candidate/:id/rescheduling-slots",
            put(routes::candidate_routes::update_rescheduling_slots),
        )
        .route(
            "/api/reset-statuses",
            post(routes::candidate_routes::reset_all_statuses),
        )
}
