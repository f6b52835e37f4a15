use interview_scheduler_backend::{
    api_router,
    config::{get_config, init_config},
    models::candidate::ScheduleData,
    store::json_store::ScheduleStore,
    AppState,
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let store = ScheduleStore::new(&config.data_file);
    if !store.path().exists() {
        warn!(path = %config.data_file, "Store file missing, creating an empty one");
        if let Some(parent) = store.path().parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        store
            .save(&ScheduleData {
                candidates: vec![],
                available_slots: vec![],
            })
            .await?;
    }
    info!(path = %config.data_file, "Using candidate store");

    match &config.voice_backend_url {
        Some(url) => info!(backend = %url, "Voice backend configured explicitly"),
        None => info!("Voice backend will be inferred from request host (port 5000)"),
    }

    let app_state = AppState::new();

    let app = api_router()
        .with_state(app_state)
        .fallback_service(ServeDir::new("public"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
