//! Health check endpoint.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /api/health - Liveness plus the configured shot backend.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let config = state.service.engine().config();
    Json(HealthResponse::new(&config.machine_name, config.max_qubits))
}
