//! Engine configuration read from the environment.

use qpiece_adapter_sim::MAX_SIM_QUBITS;
use thiserror::Error;

/// Environment variable holding the widest register a single circuit may use.
pub const MAX_QUBITS_VAR: &str = "MAX_QUBITS";

/// Environment variable naming the backend that samples shots.
pub const MACHINE_NAME_VAR: &str = "MACHINE_NAME";

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Settings shared by every engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantumConfig {
    /// Widest register a single circuit may use; larger draws are chunked.
    pub max_qubits: u32,
    /// Registry name of the shot backend.
    pub machine_name: String,
}

impl QuantumConfig {
    /// Create a configuration.
    ///
    /// The qubit limit must lie in `1..=MAX_SIM_QUBITS` and the name must not
    /// be blank.
    pub fn new(max_qubits: u32, machine_name: impl Into<String>) -> Result<Self, ConfigError> {
        let machine_name = machine_name.into();
        if max_qubits == 0 {
            return Err(ConfigError::Invalid {
                var: MAX_QUBITS_VAR,
                value: max_qubits.to_string(),
                reason: "must be a positive integer".into(),
            });
        }
        if max_qubits > MAX_SIM_QUBITS {
            return Err(ConfigError::Invalid {
                var: MAX_QUBITS_VAR,
                value: max_qubits.to_string(),
                reason: format!("must not exceed {MAX_SIM_QUBITS}"),
            });
        }
        if machine_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                var: MACHINE_NAME_VAR,
                value: machine_name,
                reason: "must not be empty".into(),
            });
        }
        Ok(Self {
            max_qubits,
            machine_name,
        })
    }

    /// Read `MAX_QUBITS` and `MACHINE_NAME` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read the configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_qubits = lookup(MAX_QUBITS_VAR).ok_or(ConfigError::Missing(MAX_QUBITS_VAR))?;
        let machine_name = lookup(MACHINE_NAME_VAR).ok_or(ConfigError::Missing(MACHINE_NAME_VAR))?;

        let max_qubits = raw_qubits
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::Invalid {
                var: MAX_QUBITS_VAR,
                value: raw_qubits.clone(),
                reason: e.to_string(),
            })?;

        Self::new(max_qubits, machine_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_reads_both_variables() {
        let config =
            QuantumConfig::from_lookup(lookup(&[("MAX_QUBITS", "5"), ("MACHINE_NAME", "qasm_simulator")]))
                .unwrap();
        assert_eq!(config.max_qubits, 5);
        assert_eq!(config.machine_name, "qasm_simulator");
    }

    #[test]
    fn test_missing_variables() {
        assert_eq!(
            QuantumConfig::from_lookup(lookup(&[("MACHINE_NAME", "qasm_simulator")])),
            Err(ConfigError::Missing("MAX_QUBITS"))
        );
        assert_eq!(
            QuantumConfig::from_lookup(lookup(&[("MAX_QUBITS", "5")])),
            Err(ConfigError::Missing("MACHINE_NAME"))
        );
    }

    #[test]
    fn test_invalid_qubit_limit() {
        for raw in ["0", "-3", "five", "", "25", "64"] {
            let err =
                QuantumConfig::from_lookup(lookup(&[("MAX_QUBITS", raw), ("MACHINE_NAME", "qasm_simulator")]))
                    .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { var: "MAX_QUBITS", .. }),
                "{raw:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_machine_name() {
        assert!(matches!(
            QuantumConfig::new(4, "  "),
            Err(ConfigError::Invalid { var: "MACHINE_NAME", .. })
        ));
    }
}
