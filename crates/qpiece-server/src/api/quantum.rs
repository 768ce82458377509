//! Quantum game endpoints.

use std::sync::Arc;

use axum::{Json, extract::State};
use qpiece_engine::{
    Grid, QuantumService, RandomIntResponse, ResultResponse, ServiceError, SuperpositionPair,
};

use crate::dto::{DetermineRequest, RandomNumberQuery};
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiQuery};
use crate::state::AppState;

/// Run a service call on the blocking pool; simulation is CPU-bound.
async fn run_blocking<T, F>(state: &AppState, op: F) -> Result<Json<T>, ApiError>
where
    T: Send + 'static,
    F: FnOnce(&QuantumService) -> Result<T, ServiceError> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    let response = tokio::task::spawn_blocking(move || op(&service)).await??;
    Ok(Json(response))
}

/// GET /api/generateRandomNumber/?maxInt=N - Uniform integer in `[0, N]`.
pub async fn generate_random_number(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<RandomNumberQuery>,
) -> Result<Json<RandomIntResponse>, ApiError> {
    run_blocking(&state, move |service| {
        service.generate_random_number(query.max_int)
    })
    .await
}

/// GET /api/createSuperposition/ - Random weighted pair of piece types.
pub async fn create_superposition(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ResultResponse<SuperpositionPair>>, ApiError> {
    run_blocking(&state, QuantumService::create_superposition).await
}

/// POST /api/determineSuperposition/ - Collapse a probability to 0 or 1.
pub async fn determine_superposition(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<DetermineRequest>,
) -> Result<Json<ResultResponse<u8>>, ApiError> {
    run_blocking(&state, move |service| {
        service.determine_superposition(req.prob)
    })
    .await
}

/// POST /api/applyHGate/ - Re-weight a pair through a Hadamard.
pub async fn apply_h_gate(
    State(state): State<Arc<AppState>>,
    ApiJson(pair): ApiJson<SuperpositionPair>,
) -> Result<Json<ResultResponse<SuperpositionPair>>, ApiError> {
    run_blocking(&state, move |service| service.apply_h_gate(&pair)).await
}

/// POST /api/flipGrid/ - Flip every cell of a grid.
pub async fn flip_grid(
    State(state): State<Arc<AppState>>,
    ApiJson(grid): ApiJson<Grid>,
) -> Result<Json<ResultResponse<Grid>>, ApiError> {
    run_blocking(&state, move |service| service.flip_grid(grid)).await
}
