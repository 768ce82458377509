//! qpiece Local Statevector Simulator
//!
//! Exact statevector simulation for the small circuits the games build. Two
//! flavors are exposed under the registry names the rest of the workspace
//! uses:
//!
//! | Name | Shots | Amplitudes |
//! |------|-------|------------|
//! | `qasm_simulator` | yes | no |
//! | `statevector_simulator` | yes | yes |
//!
//! Measurements are projective: a measured qubit collapses and stays
//! collapsed for the rest of the shot, and a later measurement into the same
//! classical bit overwrites the earlier value.
//!
//! # Example
//!
//! ```
//! use qpiece_adapter_sim::SimulatorBackend;
//! use qpiece_hal::Backend;
//! use qpiece_ir::{Circuit, QubitId};
//!
//! let backend = SimulatorBackend::new().with_seed(7);
//!
//! let mut circuit = Circuit::with_size("bell", 2, 2)?;
//! circuit.h(QubitId(0))?.cx(QubitId(0), QubitId(1))?.measure_all()?;
//!
//! let result = backend.run(&circuit, 100)?;
//! assert_eq!(result.counts.get("00") + result.counts.get("11"), 100);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod simulator;
mod statevector;

pub use simulator::{
    MAX_SIM_QUBITS, QASM_SIMULATOR, STATEVECTOR_SIMULATOR, SimulatorBackend, SimulatorFlavor,
};

use qpiece_hal::BackendRegistry;

/// Register both simulator flavors.
pub fn register_simulators(registry: &mut BackendRegistry) {
    registry.register::<SimulatorBackend>(QASM_SIMULATOR);
    registry.register::<SimulatorBackend>(STATEVECTOR_SIMULATOR);
}
