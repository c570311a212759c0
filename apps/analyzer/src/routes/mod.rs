pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::errors::AppError;
use crate::history::handlers as history;
use crate::state::AppState;

async fn not_found() -> Result<(), AppError> {
    Err(AppError::NotFound("No such route".to_string()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/analyze", post(analysis::handle_analyze))
        .route("/api/v1/history/:user_id", get(history::handle_list_history))
        .route(
            "/api/v1/history/:user_id/:entry_id",
            delete(history::handle_delete_history),
        )
        .fallback(not_found)
        .with_state(state)
}
