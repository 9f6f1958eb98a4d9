//! Application state shared across handlers.

use std::sync::Arc;

use command_persistence::CommandStore;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// Built once at startup and handed to the router; handlers never reach the
/// datastore through anything but this state.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Command store (the pooled session factory).
    pub store: CommandStore,
}

impl AppState {
    /// Creates a new AppState.
    pub fn new(config: ApiConfig, store: CommandStore) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
