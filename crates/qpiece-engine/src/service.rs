//! Request-level facade over the engines.
//!
//! Each operation wraps its engine error in a [`ServiceError`] carrying the
//! message callers see, and logs the underlying cause.

use thiserror::Error;
use tracing::warn;

use crate::config::QuantumConfig;
use crate::dto::{RandomIntResponse, ResultResponse};
use crate::engine::QuantumEngine;
use crate::error::{EngineError, EngineResult};
use crate::grid::Grid;
use crate::superposition::SuperpositionPair;

/// Message for a failed random draw.
pub const RANDOM_NUMBER_ERROR: &str = "Error in fetching quantum result";
/// Message for a failed pair creation.
pub const CREATE_SUPERPOSITION_ERROR: &str = "Error in creating superposition";
/// Message for a failed collapse or re-weighting.
pub const DETERMINE_SUPERPOSITION_ERROR: &str = "Error in determining superposition";
/// Message for a failed grid flip.
pub const FLIP_GRID_ERROR: &str = "Error in flipping grid";

/// A failed service operation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ServiceError {
    message: &'static str,
    #[source]
    source: EngineError,
}

impl ServiceError {
    /// The message reported to callers.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// The engine error behind this failure.
    pub fn cause(&self) -> &EngineError {
        &self.source
    }
}

trait ServiceContext<T> {
    fn context(self, message: &'static str) -> Result<T, ServiceError>;
}

impl<T> ServiceContext<T> for EngineResult<T> {
    fn context(self, message: &'static str) -> Result<T, ServiceError> {
        self.map_err(|source| {
            warn!(error = %source, "{}", message);
            ServiceError { message, source }
        })
    }
}

/// The five game operations.
#[derive(Debug, Clone)]
pub struct QuantumService {
    engine: QuantumEngine,
}

impl QuantumService {
    pub fn new(engine: QuantumEngine) -> Self {
        Self { engine }
    }

    /// Service on the local simulators.
    pub fn with_simulators(config: QuantumConfig) -> EngineResult<Self> {
        QuantumEngine::with_simulators(config).map(Self::new)
    }

    pub fn engine(&self) -> &QuantumEngine {
        &self.engine
    }

    /// Uniform integer in `[0, max_int]`.
    pub fn generate_random_number(&self, max_int: u64) -> Result<RandomIntResponse, ServiceError> {
        let random_int = self
            .engine
            .generate_random_integer(max_int)
            .context(RANDOM_NUMBER_ERROR)?;
        Ok(RandomIntResponse { random_int })
    }

    pub fn create_superposition(&self) -> Result<ResultResponse<SuperpositionPair>, ServiceError> {
        self.engine
            .create_pieces()
            .map(ResultResponse::new)
            .context(CREATE_SUPERPOSITION_ERROR)
    }

    pub fn determine_superposition(&self, prob: f64) -> Result<ResultResponse<u8>, ServiceError> {
        self.engine
            .find_superposition(prob)
            .map(ResultResponse::new)
            .context(DETERMINE_SUPERPOSITION_ERROR)
    }

    pub fn apply_h_gate(
        &self,
        pair: &SuperpositionPair,
    ) -> Result<ResultResponse<SuperpositionPair>, ServiceError> {
        self.engine
            .determine_h_prob(pair)
            .map(ResultResponse::new)
            .context(DETERMINE_SUPERPOSITION_ERROR)
    }

    /// Flip every cell and return the grid.
    pub fn flip_grid(&self, mut grid: Grid) -> Result<ResultResponse<Grid>, ServiceError> {
        self.engine
            .flip_entangled_grid(&mut grid)
            .context(FLIP_GRID_ERROR)?;
        Ok(ResultResponse::new(grid))
    }
}
