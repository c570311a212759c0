use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::errors::AppError;
use crate::history::HistoryEntry;
use crate::state::AppState;

/// GET /api/v1/history/:user_id
pub async fn handle_list_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(state.history.list(&user_id).await?))
}

/// DELETE /api/v1/history/:user_id/:entry_id
///
/// Returns the remaining entries. Deleting an unknown id is a no-op.
pub async fn handle_delete_history(
    State(state): State<AppState>,
    Path((user_id, entry_id)): Path<(String, Uuid)>,
) -> Result<Json<Vec<HistoryEntry>>, AppError> {
    Ok(Json(state.history.delete(&user_id, entry_id).await?))
}
