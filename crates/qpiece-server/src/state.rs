//! Application state for the API server.

use std::net::SocketAddr;
use std::sync::Arc;

use qpiece_engine::QuantumService;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 5000).into(),
        }
    }
}

/// Shared application state.
pub struct AppState {
    /// The quantum operations.
    pub service: Arc<QuantumService>,
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create application state with the default configuration.
    pub fn new(service: QuantumService) -> Self {
        Self::with_config(service, ServerConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(service: QuantumService, config: ServerConfig) -> Self {
        Self {
            service: Arc::new(service),
            config,
        }
    }
}
