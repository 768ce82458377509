//! qpiece Engines
//!
//! Game-facing operations built from small circuits on a simulated quantum
//! processor:
//!
//! | Operation | Circuit | Read as |
//! |-----------|---------|---------|
//! | [`QuantumEngine::generate_random_integer`] | H on every qubit, chunked by `MAX_QUBITS` | concatenated bits, rejection sampled |
//! | [`QuantumEngine::create_pieces`] | random draws | probability in hundredths and two distinct types |
//! | [`QuantumEngine::find_superposition`] | Rx(θ), measure | `0` or `1` |
//! | [`QuantumEngine::determine_h_prob`] | Rx(θ), Rz(θ), H | amplitude probability, rounded half-even |
//! | [`QuantumEngine::flip_entangled_grid`] | X, CX, two measures into one bit | inverted cell value |
//!
//! [`QuantumService`] wraps the operations with caller-facing error messages
//! and the JSON response shapes.
//!
//! # Example
//!
//! ```
//! use qpiece_engine::{QuantumConfig, QuantumEngine};
//!
//! let engine = QuantumEngine::with_simulators(QuantumConfig::new(4, "qasm_simulator")?)?;
//! let roll = engine.generate_random_integer(6)?;
//! assert!(roll <= 6);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod dto;
pub mod engine;
pub mod error;
pub mod grid;
pub mod random;
pub mod sampler;
pub mod service;
pub mod superposition;

pub use config::{ConfigError, QuantumConfig};
pub use dto::{RandomIntResponse, ResultResponse};
pub use engine::QuantumEngine;
pub use error::{EngineError, EngineResult};
pub use grid::{Grid, GridCell};
pub use random::{next_power_of_2, num_bits, register_sizes};
pub use sampler::MeasurementSampler;
pub use service::{QuantumService, ServiceError};
pub use superposition::{SuperpositionPair, SuperpositionPiece, round_half_even};
