//! Router configuration and server setup.

use std::future::Future;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Commands
        .route(
            "/commands",
            get(handlers::list_commands).post(handlers::create_command),
        )
        .route(
            "/commands/",
            get(handlers::list_commands).post(handlers::create_command),
        )
        .route("/commands/:id", delete(handlers::delete_command))
        // Apply middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.cors.allow_origin())
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Starts the API server and runs until `shutdown` resolves.
pub async fn serve<F>(config: ApiConfig, state: AppState, shutdown: F) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
