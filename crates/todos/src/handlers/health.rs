//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (round trip to the storage backend)

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::{handlers::ApiError, state::AppState};

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Pings the repository; an unreachable store renders as 503 through [`ApiError`].
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.todo_repo.ping().await?;

    Ok(Json(json!({ "status": "ok" })))
}
