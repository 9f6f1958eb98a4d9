//! Health check handler.

use axum::{extract::State, Json};
use tracing::warn;

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    if let Err(e) = state.store.ping().await {
        warn!(error = %e, "Health check could not reach the datastore");
        return Err(ApiError::ServiceUnavailable(format!("database: {}", e)));
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.config.uptime_seconds(),
        database: "ok".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use command_persistence::CommandStore;

    async fn make_test_state() -> AppState {
        let store = CommandStore::connect_in_memory().await.unwrap();
        store.migrate().await.unwrap();
        AppState::new(ApiConfig::default(), store)
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = make_test_state().await;
        let response = health(State(state)).await.unwrap();

        assert_eq!(response.status, "ok");
        assert_eq!(response.database, "ok");
        assert!(!response.version.is_empty());
    }

    #[tokio::test]
    async fn test_health_handler_database_down() {
        let state = make_test_state().await;
        state.store.close().await;

        let result = health(State(state)).await;
        assert!(matches!(result, Err(ApiError::ServiceUnavailable(_))));
    }
}
