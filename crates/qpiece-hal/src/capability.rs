//! Backend capability introspection.

use serde::{Deserialize, Serialize};

/// Feature flag for backends that can report raw amplitudes.
pub const FEATURE_STATEVECTOR: &str = "statevector";

/// Feature flag for backends that sample measurement shots.
pub const FEATURE_SHOTS: &str = "shots";

/// What a backend can execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Name of the backend.
    pub name: String,
    /// Widest register the backend will simulate.
    pub num_qubits: u32,
    /// Maximum number of shots per run.
    pub max_shots: u32,
    /// Supported gate names.
    pub gate_set: Vec<String>,
    /// Whether this is a simulator (`true`) or real hardware (`false`).
    pub is_simulator: bool,
    /// Additional capability flags, see [`FEATURE_STATEVECTOR`] and [`FEATURE_SHOTS`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
}

impl Capabilities {
    /// Capabilities of an ideal local simulator.
    pub fn simulator(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            max_shots: 100_000,
            gate_set: ["h", "x", "cx", "rx", "rz", "measure"]
                .into_iter()
                .map(String::from)
                .collect(),
            is_simulator: true,
            features: vec![],
        }
    }

    /// Add a feature flag.
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    /// Check whether a feature flag is present.
    pub fn supports(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f == feature)
    }

    /// Check whether a gate is in the gate set.
    pub fn supports_gate(&self, name: &str) -> bool {
        self.gate_set.iter().any(|g| g == name)
    }
}
