//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{infrastructure::dto::http::SessionSnapshotDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Debug endpoint to get the current session state
pub async fn debug_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionSnapshotDto>, StatusCode> {
    match state.session.snapshot().await {
        Ok(snapshot) => Ok(Json(snapshot.into())),
        Err(e) => {
            tracing::error!("Failed to read session state: {}", e);
            Err(StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
