//! The gate set used by the game circuits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gates with fixed, noiseless semantics.
///
/// Only the operations the game circuits need are modelled. Rotation angles
/// are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X (bit flip) gate.
    X,
    /// Controlled-X (CNOT) gate, operands `[control, target]`.
    CX,
    /// Rotation around the X axis.
    Rx(f64),
    /// Rotation around the Z axis.
    Rz(f64),
}

impl StandardGate {
    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::CX => "cx",
            StandardGate::Rx(_) => "rx",
            StandardGate::Rz(_) => "rz",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X | StandardGate::Rx(_) | StandardGate::Rz(_) => 1,
            StandardGate::CX => 2,
        }
    }

    /// Rotation angle, if the gate carries one.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Rx(theta) | StandardGate::Rz(theta) => Some(*theta),
            _ => None,
        }
    }
}

impl fmt::Display for StandardGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.angle() {
            Some(theta) => write!(f, "{}({theta})", self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}
