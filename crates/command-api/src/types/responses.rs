//! Response DTOs for the API.

use serde::Serialize;

use command_models::Command;

/// Envelope wrapping every successful command response in a `data` field.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    /// Response payload.
    pub data: T,
}

impl<T> DataResponse<T> {
    /// Wraps a payload.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// List of commands.
pub type CommandListResponse = DataResponse<Vec<Command>>;

/// A single command.
pub type CommandResponse = DataResponse<Command>;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Datastore status.
    pub database: String,
}
