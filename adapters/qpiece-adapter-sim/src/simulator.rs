//! Simulator backend implementation.

use std::sync::Mutex;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, instrument};

use qpiece_hal::{
    Backend, BackendConfig, BackendFactory, Capabilities, Counts, ExecutionResult, FEATURE_SHOTS,
    FEATURE_STATEVECTOR, HalError, HalResult, Statevector as StatevectorResult, ValidationResult,
};
use qpiece_ir::{Circuit, InstructionKind};

use crate::statevector::Statevector;

/// Name of the shot-sampling flavor.
pub const QASM_SIMULATOR: &str = "qasm_simulator";

/// Name of the amplitude-reporting flavor.
pub const STATEVECTOR_SIMULATOR: &str = "statevector_simulator";

const DEFAULT_MAX_QUBITS: u32 = 20;

/// Widest circuit any simulator instance accepts (2^24 amplitudes, 256 MiB).
pub const MAX_SIM_QUBITS: u32 = 24;

/// Which results a simulator instance produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatorFlavor {
    /// Measurement shots only.
    Qasm,
    /// Amplitudes, and shots on request.
    Statevector,
}

impl SimulatorFlavor {
    /// The registry name of this flavor.
    pub fn name(self) -> &'static str {
        match self {
            SimulatorFlavor::Qasm => QASM_SIMULATOR,
            SimulatorFlavor::Statevector => STATEVECTOR_SIMULATOR,
        }
    }

    /// Resolve a registry name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            QASM_SIMULATOR => Some(SimulatorFlavor::Qasm),
            STATEVECTOR_SIMULATOR => Some(SimulatorFlavor::Statevector),
            _ => None,
        }
    }
}

/// Local simulator backend.
///
/// Each call starts from |0...0⟩ and evolves a fresh statevector, so no state
/// is carried between calls except the random source.
pub struct SimulatorBackend {
    /// Which results this instance produces.
    flavor: SimulatorFlavor,
    /// Cached capabilities.
    capabilities: Capabilities,
    /// Seeded source for reproducible runs; `None` uses the thread RNG.
    rng: Option<Mutex<StdRng>>,
}

impl SimulatorBackend {
    /// Create a shot-sampling simulator with default settings.
    pub fn new() -> Self {
        Self::with_flavor(SimulatorFlavor::Qasm)
    }

    /// Create a simulator of the given flavor.
    pub fn with_flavor(flavor: SimulatorFlavor) -> Self {
        Self {
            flavor,
            capabilities: Self::capabilities_for(flavor, DEFAULT_MAX_QUBITS),
            rng: None,
        }
    }

    /// Shortcut for the amplitude-reporting flavor.
    pub fn statevector() -> Self {
        Self::with_flavor(SimulatorFlavor::Statevector)
    }

    /// Limit the circuit width the simulator accepts, at most [`MAX_SIM_QUBITS`].
    pub fn with_max_qubits(mut self, max_qubits: u32) -> Self {
        self.capabilities = Self::capabilities_for(self.flavor, max_qubits.min(MAX_SIM_QUBITS));
        self
    }

    /// Use a seeded random source.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Some(Mutex::new(StdRng::seed_from_u64(seed)));
        self
    }

    /// The flavor of this instance.
    pub fn flavor(&self) -> SimulatorFlavor {
        self.flavor
    }

    fn capabilities_for(flavor: SimulatorFlavor, max_qubits: u32) -> Capabilities {
        let caps = Capabilities::simulator(flavor.name(), max_qubits).with_feature(FEATURE_SHOTS);
        match flavor {
            SimulatorFlavor::Qasm => caps,
            SimulatorFlavor::Statevector => caps.with_feature(FEATURE_STATEVECTOR),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut dyn RngCore) -> T) -> T {
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
                f(&mut *rng)
            }
            None => f(&mut rand::thread_rng()),
        }
    }

    /// Run simulation synchronously.
    #[instrument(skip(self, circuit), fields(backend = self.flavor.name(), circuit = circuit.name()))]
    fn run_simulation(&self, circuit: &Circuit, shots: u32) -> ExecutionResult {
        let start = Instant::now();

        let num_qubits = circuit.num_qubits();
        debug!(
            "Starting simulation: {} qubits, {} shots",
            num_qubits, shots
        );

        let mut counts = Counts::new();

        self.with_rng(|rng| {
            for _ in 0..shots {
                let mut sv = Statevector::new(num_qubits);
                let mut clbits = vec![false; circuit.num_clbits()];

                for inst in circuit.instructions() {
                    match &inst.kind {
                        InstructionKind::Gate(gate) => {
                            let qubits: Vec<_> = inst.qubits.iter().map(|q| q.index()).collect();
                            sv.apply_gate(gate, &qubits);
                        }
                        InstructionKind::Measure => {
                            for (qubit, clbit) in inst.qubits.iter().zip(&inst.clbits) {
                                clbits[clbit.index()] = sv.measure(qubit.index(), &mut *rng);
                            }
                        }
                    }
                }

                counts.insert(clbits_to_bitstring(&clbits), 1);
            }
        });

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        ExecutionResult::new(counts, shots).with_execution_time(elapsed.as_millis() as u64)
    }
}

/// Render classical bits with the highest index first.
fn clbits_to_bitstring(clbits: &[bool]) -> String {
    clbits
        .iter()
        .rev()
        .map(|&bit| if bit { '1' } else { '0' })
        .collect()
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatorBackend {
    fn name(&self) -> &str {
        &self.capabilities.name
    }

    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn validate(&self, circuit: &Circuit) -> ValidationResult {
        let num_qubits = circuit.num_qubits();
        let mut reasons = Vec::new();

        if num_qubits == 0 {
            reasons.push("circuit has no qubits".to_string());
        }
        for (pos, inst) in circuit.instructions().iter().enumerate() {
            if let Some(qubit) = inst.qubits.iter().find(|q| q.index() >= num_qubits) {
                reasons.push(format!("instruction {pos} ({}) uses unmapped {qubit}", inst.name()));
            }
            if let Some(clbit) = inst.clbits.iter().find(|c| c.index() >= circuit.num_clbits()) {
                reasons.push(format!("instruction {pos} ({}) writes unmapped {clbit}", inst.name()));
            }
            if let Some(gate) = inst.as_gate() {
                if inst.qubits.len() != gate.num_qubits() as usize {
                    reasons.push(format!(
                        "instruction {pos} ({}) has {} operands",
                        gate.name(),
                        inst.qubits.len()
                    ));
                }
            }
        }
        if !reasons.is_empty() {
            return ValidationResult::Invalid { reasons };
        }

        if num_qubits > self.capabilities.num_qubits as usize {
            return ValidationResult::TooLarge {
                required: num_qubits as u32,
                available: self.capabilities.num_qubits,
            };
        }
        ValidationResult::Valid
    }

    fn run(&self, circuit: &Circuit, shots: u32) -> HalResult<ExecutionResult> {
        self.validate(circuit).into_result()?;
        if shots == 0 || shots > self.capabilities.max_shots {
            return Err(HalError::InvalidShots(format!(
                "{shots} shots requested, expected 1..={}",
                self.capabilities.max_shots
            )));
        }
        Ok(self.run_simulation(circuit, shots))
    }

    #[instrument(skip(self, circuit), fields(backend = self.flavor.name(), circuit = circuit.name()))]
    fn statevector(&self, circuit: &Circuit) -> HalResult<StatevectorResult> {
        if self.flavor != SimulatorFlavor::Statevector {
            return Err(HalError::Unsupported(format!(
                "'{}' samples shots only; use '{STATEVECTOR_SIMULATOR}' for amplitudes",
                self.name()
            )));
        }
        self.validate(circuit).into_result()?;

        let mut sv = Statevector::new(circuit.num_qubits());
        for inst in circuit.instructions() {
            if let Some(gate) = inst.as_gate() {
                let qubits: Vec<_> = inst.qubits.iter().map(|q| q.index()).collect();
                sv.apply_gate(gate, &qubits);
            }
        }
        debug!("Prepared {} amplitudes", sv.amplitudes().len());

        Ok(StatevectorResult::new(sv.into_amplitudes()))
    }
}

impl BackendFactory for SimulatorBackend {
    fn from_config(config: BackendConfig) -> HalResult<Self> {
        let flavor = SimulatorFlavor::from_name(&config.name).ok_or_else(|| {
            HalError::Configuration(format!("'{}' is not a simulator flavor", config.name))
        })?;
        let max_qubits = match config.extra_u64("max_qubits") {
            Some(0) => {
                return Err(HalError::Configuration(
                    "max_qubits must be positive".to_string(),
                ));
            }
            Some(n) if n > u64::from(MAX_SIM_QUBITS) => {
                return Err(HalError::Configuration(format!(
                    "max_qubits {n} exceeds the simulator limit of {MAX_SIM_QUBITS}"
                )));
            }
            Some(n) => n as u32,
            None => DEFAULT_MAX_QUBITS,
        };

        let backend = Self::with_flavor(flavor).with_max_qubits(max_qubits);
        Ok(match config.extra_u64("seed") {
            Some(seed) => backend.with_seed(seed),
            None => backend,
        })
    }
}
