//! Command handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};
use tracing::debug;

use command_models::{CommandId, NewCommand};

use crate::error::Result;
use crate::extract::ValidatedJson;
use crate::state::AppState;
use crate::types::{CommandListResponse, CommandResponse, CreateCommandRequest, DataResponse};

/// GET /commands - List all commands.
pub async fn list_commands(State(state): State<AppState>) -> Result<Json<CommandListResponse>> {
    let commands = state.store.list().await?;
    debug!(count = commands.len(), "Listed commands");
    Ok(Json(DataResponse::new(commands)))
}

/// POST /commands - Create a command from a validated payload.
pub async fn create_command(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCommandRequest>,
) -> Result<Json<CommandResponse>> {
    let command = state.store.create(NewCommand::from(req)).await?;
    Ok(Json(DataResponse::new(command)))
}

/// DELETE /commands/:id - Delete a command and return the remaining list.
pub async fn delete_command(
    State(state): State<AppState>,
    id: std::result::Result<Path<CommandId>, PathRejection>,
) -> Result<Json<CommandListResponse>> {
    let Path(id) = id?;
    state.store.delete(id).await?;
    list_commands(State(state)).await
}
