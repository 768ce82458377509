//! qpiece Backend Abstraction
//!
//! The capability interface the game engines program against. A backend
//! takes a [`qpiece_ir::Circuit`] and either samples measurement shots
//! ([`Backend::run`]) or reports the amplitudes of the prepared state
//! ([`Backend::statevector`]). The engines assume nothing else about it: any
//! noiseless implementation that honours the gate semantics will do.
//!
//! # Example
//!
//! ```ignore
//! use qpiece_hal::Backend;
//! use qpiece_ir::{Circuit, ClbitId, QubitId};
//!
//! let mut circuit = Circuit::with_size("coin", 1, 1)?;
//! circuit.h(QubitId(0))?.measure(QubitId(0), ClbitId(0))?;
//!
//! let result = backend.run(&circuit, 1)?;
//! assert_eq!(result.counts.total(), 1);
//! ```

pub mod backend;
pub mod capability;
pub mod error;
pub mod registry;
pub mod result;

pub use backend::{Backend, BackendConfig, BackendFactory, ValidationResult};
pub use capability::{Capabilities, FEATURE_SHOTS, FEATURE_STATEVECTOR};
pub use error::{HalError, HalResult};
pub use registry::BackendRegistry;
pub use result::{Counts, ExecutionResult, MeasuredBit, Statevector};
