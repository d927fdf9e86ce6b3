pub mod handlers;
pub mod types;

pub use handlers::{AppState, DEFAULT_INSTRUCTION, GENERATION_TEMPERATURE};
pub use types::{PromptRequest, PromptResponse, VideoPayload};

use crate::{
    Result,
    config::{self, Config},
    gemini::{GeminiClient, PromptModel},
};
use axum::{Router, routing::post};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Builds the application router around the given state. Only POST is
/// routed; other methods on the endpoint get 405 from axum's method
/// routing. The CORS layer is permissive: the expected caller is a
/// browser page on another origin.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/generatePrompt", post(handlers::generate_prompt))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // The credential is resolved once at startup; a missing credential
    // still boots the server so the endpoint can report it per request.
    let model: Option<Arc<dyn PromptModel>> = match config::resolve_api_key() {
        Some(api_key) => Some(Arc::new(GeminiClient::new(api_key, config.gemini.clone()))),
        None => {
            warn!(
                "No upstream credential found (checked {}); requests will fail with 500",
                config::API_KEY_VARS.join(", ")
            );
            None
        }
    };

    let app = router(AppState { model });

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
