//! qpiece Server - HTTP interface to the quantum game services.
//!
//! Every operation of [`qpiece_engine::QuantumService`] is exposed as a JSON
//! endpoint under `/api`. Failures, including malformed queries and bodies,
//! answer `400` with the error message as a bare JSON string.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use qpiece_engine::{QuantumConfig, QuantumService};
//! use qpiece_server::{AppState, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = QuantumService::with_simulators(QuantumConfig::from_env()?)?;
//!     let state = Arc::new(AppState::new(service));
//!     let bind_address = state.config.bind_address;
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(bind_address).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod dto;
pub mod error;
pub mod extract;
pub mod server;
pub mod state;

pub use dto::{DetermineRequest, HealthResponse, RandomNumberQuery};
pub use error::ApiError;
pub use server::create_router;
pub use state::{AppState, ServerConfig};
