//! Entanglement-driven grid flips.

use std::collections::BTreeMap;

use qpiece_ir::{Circuit, ClbitId, QubitId};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::engine::QuantumEngine;
use crate::error::{EngineError, EngineResult};

/// A single binary grid cell.
///
/// Fields other than `value` are carried through a flip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub value: u8,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GridCell {
    /// A cell with no extra fields.
    pub fn new(value: u8) -> Self {
        Self {
            value,
            extra: serde_json::Map::new(),
        }
    }
}

/// Grid cells by key, visited in key order.
pub type Grid = BTreeMap<String, GridCell>;

/// Two-qubit circuit whose single classical bit ends up as NOT `value`.
///
/// Qubit 0 is driven to |1⟩ and controls a CX onto qubit 1, which holds
/// `value`. Both qubits are measured into c0, so qubit 1's reading wins.
fn flip_circuit(value: u8) -> EngineResult<Circuit> {
    let mut circuit = Circuit::with_size("flip", 2, 1)?;
    if value == 1 {
        circuit.x(QubitId(1))?;
    }
    circuit
        .x(QubitId(0))?
        .cx(QubitId(0), QubitId(1))?
        .measure(QubitId(0), ClbitId(0))?
        .measure(QubitId(1), ClbitId(0))?;
    Ok(circuit)
}

impl QuantumEngine {
    /// Flip every cell of `grid` in place.
    ///
    /// All values must be 0 or 1; the grid is left untouched otherwise.
    #[instrument(skip(self, grid), fields(cells = grid.len()))]
    pub fn flip_entangled_grid(&self, grid: &mut Grid) -> EngineResult<()> {
        if let Some((key, cell)) = grid.iter().find(|(_, cell)| cell.value > 1) {
            return Err(EngineError::InvalidArgument(format!(
                "cell '{key}' has value {}, expected 0 or 1",
                cell.value
            )));
        }

        for cell in grid.values_mut() {
            let circuit = flip_circuit(cell.value)?;
            cell.value = self.sampler().sample_bit(&circuit)?.as_u8();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QuantumConfig;
    use std::sync::Arc;

    use qpiece_adapter_sim::SimulatorBackend;

    fn engine() -> QuantumEngine {
        QuantumEngine::new(
            QuantumConfig::new(4, "qasm_simulator").unwrap(),
            Arc::new(SimulatorBackend::new()),
            Arc::new(SimulatorBackend::statevector()),
        )
        .unwrap()
    }

    fn grid(cells: &[(&str, u8)]) -> Grid {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), GridCell::new(*v)))
            .collect()
    }

    #[test]
    fn test_flip_inverts_every_cell() {
        let mut g = grid(&[("a1", 0), ("a2", 1), ("b1", 1), ("b2", 0)]);
        engine().flip_entangled_grid(&mut g).unwrap();
        assert_eq!(g, grid(&[("a1", 1), ("a2", 0), ("b1", 0), ("b2", 1)]));
    }

    #[test]
    fn test_flip_twice_restores() {
        let original = grid(&[("x", 1), ("y", 0), ("z", 1)]);
        let mut g = original.clone();
        let engine = engine();
        engine.flip_entangled_grid(&mut g).unwrap();
        engine.flip_entangled_grid(&mut g).unwrap();
        assert_eq!(g, original);
    }

    #[test]
    fn test_empty_grid() {
        let mut g = Grid::new();
        engine().flip_entangled_grid(&mut g).unwrap();
        assert!(g.is_empty());
    }

    #[test]
    fn test_rejects_non_binary_cell_without_mutation() {
        let original = grid(&[("a", 0), ("b", 3)]);
        let mut g = original.clone();
        assert!(matches!(
            engine().flip_entangled_grid(&mut g),
            Err(EngineError::InvalidArgument(_))
        ));
        assert_eq!(g, original);
    }

    #[test]
    fn test_extra_cell_fields_survive_flip() {
        let mut g: Grid = serde_json::from_value(serde_json::json!({
            "c3": { "value": 1, "owner": "player2", "locked": false }
        }))
        .unwrap();
        engine().flip_entangled_grid(&mut g).unwrap();

        assert_eq!(
            serde_json::to_value(&g).unwrap(),
            serde_json::json!({ "c3": { "value": 0, "owner": "player2", "locked": false } })
        );
    }

    #[test]
    fn test_flip_circuit_shape() {
        let circuit = flip_circuit(1).unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.num_clbits(), 1);
        assert_eq!(circuit.num_ops(), 5);
        assert_eq!(flip_circuit(0).unwrap().num_ops(), 4);
    }
}
