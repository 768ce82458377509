//! Axum server setup and routing.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Create the Axum router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        .route(
            "/generateRandomNumber/",
            get(api::quantum::generate_random_number),
        )
        .route(
            "/createSuperposition/",
            get(api::quantum::create_superposition),
        )
        .route(
            "/determineSuperposition/",
            post(api::quantum::determine_superposition),
        )
        .route("/applyHGate/", post(api::quantum::apply_h_gate))
        .route("/flipGrid/", post(api::quantum::flip_grid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
