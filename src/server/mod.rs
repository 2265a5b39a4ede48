pub mod handlers;
pub mod types;
mod uploads;

pub use uploads::{StagedUpload, UploadStore};

use crate::{Result, analysis::FoodAnalyzer, config::Config, llm::OpenRouterClient};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Room for the `api_key` field and multipart framing on top of the image.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn router(state: handlers::AppState) -> Router {
    let body_limit = state.max_image_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/analyze", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = Arc::new(OpenRouterClient::new(&config.openrouter)?);
    info!(
        "Using vision model {} and nutrition model {} via {}",
        config.openrouter.vision_model,
        config.openrouter.nutrition_model,
        llm.endpoint()
    );

    let analyzer = FoodAnalyzer::from_config(llm, &config.openrouter);
    let uploads = UploadStore::open(config.server.upload_dir()).await?;

    let app_state = handlers::AppState {
        analyzer: Arc::new(analyzer),
        uploads: Arc::new(uploads),
        max_image_bytes: config.server.max_image_bytes,
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
