//! Error types for the engines.

use qpiece_hal::HalError;
use qpiece_ir::IrError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building, running or interpreting a circuit.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid circuit: {0}")]
    InvalidCircuit(#[from] IrError),

    #[error("Backend error: {0}")]
    Backend(#[from] HalError),

    #[error("Simulation failure: {0}")]
    SimulationFailure(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
