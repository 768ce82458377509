//! The engine context shared by every quantum operation.

use std::sync::Arc;

use qpiece_adapter_sim::{STATEVECTOR_SIMULATOR, register_simulators};
use qpiece_hal::{
    Backend, BackendConfig, BackendRegistry, FEATURE_STATEVECTOR, HalError, Statevector,
};
use qpiece_ir::Circuit;
use tracing::debug;

use crate::config::QuantumConfig;
use crate::error::EngineResult;
use crate::sampler::MeasurementSampler;

/// Configuration plus the two backends the operations run on.
///
/// Shots come from the backend named by `machine_name`; amplitudes always
/// come from a backend advertising the statevector feature.
#[derive(Clone)]
pub struct QuantumEngine {
    config: QuantumConfig,
    sampler: MeasurementSampler,
    amplitudes: Arc<dyn Backend>,
}

impl QuantumEngine {
    /// Assemble an engine from explicit backends.
    pub fn new(
        config: QuantumConfig,
        shots: Arc<dyn Backend>,
        amplitudes: Arc<dyn Backend>,
    ) -> EngineResult<Self> {
        if !amplitudes.capabilities().supports(FEATURE_STATEVECTOR) {
            return Err(HalError::Unsupported(format!(
                "'{}' cannot report amplitudes",
                amplitudes.name()
            ))
            .into());
        }
        debug!(
            "Engine using '{}' for shots and '{}' for amplitudes",
            shots.name(),
            amplitudes.name()
        );
        Ok(Self {
            config,
            sampler: MeasurementSampler::new(shots),
            amplitudes,
        })
    }

    /// Resolve both backends from a registry.
    pub fn from_registry(config: QuantumConfig, registry: &BackendRegistry) -> EngineResult<Self> {
        let width = serde_json::json!(config.max_qubits);
        let shots = registry.create(
            BackendConfig::new(config.machine_name.clone()).with_extra("max_qubits", width.clone()),
        )?;
        let amplitudes = registry
            .create(BackendConfig::new(STATEVECTOR_SIMULATOR).with_extra("max_qubits", width))?;
        Self::new(config, shots, amplitudes)
    }

    /// Build an engine on the local simulators.
    pub fn with_simulators(config: QuantumConfig) -> EngineResult<Self> {
        let mut registry = BackendRegistry::new();
        register_simulators(&mut registry);
        Self::from_registry(config, &registry)
    }

    /// The configuration in use.
    pub fn config(&self) -> &QuantumConfig {
        &self.config
    }

    /// The shot sampler.
    pub fn sampler(&self) -> &MeasurementSampler {
        &self.sampler
    }

    pub(crate) fn statevector(&self, circuit: &Circuit) -> EngineResult<Statevector> {
        Ok(self.amplitudes.statevector(circuit)?)
    }
}

impl std::fmt::Debug for QuantumEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantumEngine")
            .field("config", &self.config)
            .field("sampler", &self.sampler)
            .field("amplitudes", &self.amplitudes.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use qpiece_adapter_sim::SimulatorBackend;

    #[test]
    fn test_with_simulators() {
        let config = QuantumConfig::new(4, "qasm_simulator").unwrap();
        let engine = QuantumEngine::with_simulators(config).unwrap();

        assert_eq!(engine.sampler().backend().name(), "qasm_simulator");
        assert_eq!(engine.sampler().backend().capabilities().num_qubits, 4);
    }

    #[test]
    fn test_unknown_machine() {
        let config = QuantumConfig::new(4, "ibmq_armonk").unwrap();
        assert!(matches!(
            QuantumEngine::with_simulators(config),
            Err(EngineError::Backend(HalError::UnknownBackend(_)))
        ));
    }

    #[test]
    fn test_amplitude_backend_must_report_amplitudes() {
        let config = QuantumConfig::new(4, "qasm_simulator").unwrap();
        let qasm: Arc<dyn Backend> = Arc::new(SimulatorBackend::new());
        assert!(matches!(
            QuantumEngine::new(config, qasm.clone(), qasm),
            Err(EngineError::Backend(HalError::Unsupported(_)))
        ));
    }
}
