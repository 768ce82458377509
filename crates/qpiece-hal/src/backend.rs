//! Backend trait and configuration.
//!
//! ```text
//!   capabilities() ──→ validate() ──→ run() / statevector()
//!    (&ref)             (checks)       (simulate, return)
//! ```
//!
//! Every call is synchronous: the circuits are a handful of qubits wide and
//! finish in microseconds, so there is no job lifecycle to poll.

use std::fmt;

use serde::{Deserialize, Serialize};

use qpiece_ir::Circuit;

use crate::capability::Capabilities;
use crate::error::{HalError, HalResult};
use crate::result::{ExecutionResult, Statevector};

/// Configuration for a backend instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Name of the backend.
    pub name: String,
    /// Additional configuration (`max_qubits`, `seed`, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl BackendConfig {
    /// Create a new backend configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an unsigned integer from the extra configuration.
    pub fn extra_u64(&self, key: &str) -> Option<u64> {
        self.extra.get(key).and_then(serde_json::Value::as_u64)
    }
}

impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("name", &self.name)
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for circuit execution backends.
///
/// # Contract
///
/// - `capabilities()` MUST be infallible and cached at construction time.
/// - `run()` and `statevector()` MUST validate the circuit first and return
///   no partial result on failure.
/// - Each call is independent: no circuit state survives between calls.
pub trait Backend: Send + Sync {
    /// Get the name of this backend.
    fn name(&self) -> &str;

    /// Get the capabilities of this backend.
    fn capabilities(&self) -> &Capabilities;

    /// Validate a circuit against backend constraints.
    fn validate(&self, circuit: &Circuit) -> ValidationResult;

    /// Execute `circuit` for `shots` shots and return the measured counts.
    fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult>;

    /// Apply every gate of `circuit` and return the amplitudes, skipping
    /// measurements.
    fn statevector(&self, circuit: &Circuit) -> HalResult<Statevector> {
        let _ = circuit;
        Err(HalError::Unsupported(format!(
            "backend '{}' does not report amplitudes",
            self.name()
        )))
    }
}

/// Result of circuit validation against backend constraints.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Circuit can be executed as-is.
    Valid,
    /// Circuit refers to missing slots or is empty.
    Invalid {
        /// Reasons the circuit is invalid.
        reasons: Vec<String>,
    },
    /// Circuit is well-formed but wider than the backend allows.
    TooLarge {
        /// Qubits the circuit needs.
        required: u32,
        /// Qubits the backend offers.
        available: u32,
    },
}

impl ValidationResult {
    /// Check if the circuit is valid.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Convert into a `HalResult`, mapping failures to the matching error.
    pub fn into_result(self) -> HalResult<()> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid { reasons } => {
                Err(HalError::InvalidCircuit(reasons.join("; ")))
            }
            ValidationResult::TooLarge {
                required,
                available,
            } => Err(HalError::CircuitTooLarge(format!(
                "Circuit has {required} qubits but backend only supports {available}"
            ))),
        }
    }
}

/// Trait for creating backends from configuration.
pub trait BackendFactory: Backend + Sized {
    /// Create a backend from configuration.
    fn from_config(config: BackendConfig) -> HalResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_config() {
        let config = BackendConfig::new("test")
            .with_extra("max_qubits", serde_json::json!(5))
            .with_extra("label", serde_json::json!("x"));

        assert_eq!(config.name, "test");
        assert_eq!(config.extra_u64("max_qubits"), Some(5));
        assert_eq!(config.extra_u64("label"), None);
        assert_eq!(config.extra_u64("seed"), None);
    }

    #[test]
    fn test_validation_result_into_result() {
        assert!(ValidationResult::Valid.into_result().is_ok());
        assert!(matches!(
            ValidationResult::Invalid {
                reasons: vec!["empty".into()]
            }
            .into_result(),
            Err(HalError::InvalidCircuit(msg)) if msg == "empty"
        ));
        assert!(matches!(
            ValidationResult::TooLarge {
                required: 9,
                available: 4
            }
            .into_result(),
            Err(HalError::CircuitTooLarge(_))
        ));
    }
}
