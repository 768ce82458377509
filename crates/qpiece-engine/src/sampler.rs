//! Single-shot measurement sampling.

use std::sync::Arc;

use qpiece_hal::{Backend, Counts, MeasuredBit};
use qpiece_ir::Circuit;

use crate::error::{EngineError, EngineResult};

/// Runs circuits for exactly one shot and reads back the outcome.
#[derive(Clone)]
pub struct MeasurementSampler {
    backend: Arc<dyn Backend>,
}

impl MeasurementSampler {
    /// Wrap a shot backend.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The backend shots are drawn from.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    /// Run one shot and return the raw counts.
    pub fn sample_counts(&self, circuit: &Circuit) -> EngineResult<Counts> {
        Ok(self.backend.run(circuit, 1)?.counts)
    }

    /// Run one shot and return the observed bitstring.
    pub fn sample_bitstring(&self, circuit: &Circuit) -> EngineResult<String> {
        let counts = self.sample_counts(circuit)?;
        counts.single_shot().map(str::to_owned).ok_or_else(|| {
            EngineError::SimulationFailure(format!(
                "no single-shot outcome among {} keys for '{}'",
                counts.len(),
                circuit.name()
            ))
        })
    }

    /// Run one shot of a one-clbit circuit.
    ///
    /// `Zero` when the outcome `"0"` was observed exactly once, `One` otherwise.
    pub fn sample_bit(&self, circuit: &Circuit) -> EngineResult<MeasuredBit> {
        let counts = self.sample_counts(circuit)?;
        Ok(if counts.get("0") == 1 {
            MeasuredBit::Zero
        } else {
            MeasuredBit::One
        })
    }
}

impl std::fmt::Debug for MeasurementSampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementSampler")
            .field("backend", &self.backend.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qpiece_adapter_sim::SimulatorBackend;
    use qpiece_hal::{Capabilities, ExecutionResult, HalResult, ValidationResult};
    use qpiece_ir::QubitId;

    /// Backend that reports a fixed set of counts.
    struct FixedCounts {
        caps: Capabilities,
        counts: Vec<(&'static str, u64)>,
    }

    impl FixedCounts {
        fn new(counts: Vec<(&'static str, u64)>) -> Arc<dyn Backend> {
            Arc::new(Self {
                caps: Capabilities::simulator("fixed", 4),
                counts,
            })
        }
    }

    impl Backend for FixedCounts {
        fn name(&self) -> &str {
            "fixed"
        }

        fn capabilities(&self) -> &Capabilities {
            &self.caps
        }

        fn validate(&self, _circuit: &Circuit) -> ValidationResult {
            ValidationResult::Valid
        }

        fn run(&self, _circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
            let counts = self
                .counts
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect();
            Ok(ExecutionResult::new(counts, shots))
        }
    }

    fn one_bit() -> Circuit {
        let mut circuit = Circuit::with_size("bit", 1, 1).unwrap();
        circuit.measure_all().unwrap();
        circuit
    }

    #[test]
    fn test_sample_bit_reads_zero_key() {
        let sampler = MeasurementSampler::new(Arc::new(SimulatorBackend::new()));
        assert_eq!(sampler.sample_bit(&one_bit()).unwrap(), MeasuredBit::Zero);

        let mut flipped = Circuit::with_size("bit", 1, 1).unwrap();
        flipped.x(QubitId(0)).unwrap().measure_all().unwrap();
        assert_eq!(sampler.sample_bit(&flipped).unwrap(), MeasuredBit::One);
    }

    #[test]
    fn test_missing_zero_key_is_one() {
        let sampler = MeasurementSampler::new(FixedCounts::new(vec![]));
        assert_eq!(sampler.sample_bit(&one_bit()).unwrap(), MeasuredBit::One);
    }

    #[test]
    fn test_sample_bitstring() {
        let sampler = MeasurementSampler::new(FixedCounts::new(vec![("101", 1)]));
        assert_eq!(sampler.sample_bitstring(&one_bit()).unwrap(), "101");
    }

    #[test]
    fn test_sample_bitstring_without_single_shot() {
        let sampler = MeasurementSampler::new(FixedCounts::new(vec![("0", 2)]));
        assert!(matches!(
            sampler.sample_bitstring(&one_bit()),
            Err(EngineError::SimulationFailure(_))
        ));
    }
}
