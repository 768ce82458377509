//! qpiece Circuit Model
//!
//! Data structures for the small, fixed circuits the game services evaluate:
//! qubit and classical registers, a five-gate set plus measurement, and an
//! ordered instruction list. There is no DAG and no rewriting; a circuit is
//! built once, handed to a backend, and dropped.
//!
//! # Example: Biased coin
//!
//! ```rust
//! use qpiece_ir::{Circuit, ClbitId, QubitId};
//!
//! let prob: f64 = 0.25;
//! let theta = 2.0 * prob.sqrt().acos();
//!
//! let mut circuit = Circuit::with_size("coin", 1, 1)?;
//! circuit.rx(theta, QubitId(0))?.measure(QubitId(0), ClbitId(0))?;
//!
//! assert_eq!(circuit.num_ops(), 2);
//! # Ok::<(), qpiece_ir::IrError>(())
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X` | 1 | Pauli-X gate |
//! | `CX` | 2 | Controlled-NOT |
//! | `Rx`, `Rz` | 1 | Rotation gates |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{Clbit, ClbitId, Qubit, QubitId};
