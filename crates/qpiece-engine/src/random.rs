//! Random integers from uniform superpositions.
//!
//! A draw of `n` bits puts `n` qubits in superposition with Hadamard gates and
//! measures them once. Draws wider than the configured qubit limit are split
//! into several circuits whose bitstrings are concatenated.

use qpiece_ir::Circuit;
use tracing::{debug, instrument};

use crate::engine::QuantumEngine;
use crate::error::{EngineError, EngineResult};

/// Number of bits needed to write `n` in binary; `num_bits(0)` is 1.
pub fn num_bits(n: u64) -> u32 {
    if n == 0 { 1 } else { u64::BITS - n.leading_zeros() }
}

/// Smallest power of two not below `n`; `next_power_of_2(0)` is 1.
///
/// Returns `None` past `2^63`.
pub fn next_power_of_2(n: u64) -> Option<u64> {
    n.checked_next_power_of_two()
}

/// Split `n_bits` into registers of at most `max_qubits`, remainder last.
pub fn register_sizes(n_bits: u32, max_qubits: u32) -> Vec<u32> {
    let max_qubits = max_qubits.max(1);
    let mut sizes = vec![max_qubits; (n_bits / max_qubits) as usize];
    let remainder = n_bits % max_qubits;
    if remainder != 0 {
        sizes.push(remainder);
    }
    sizes
}

/// Hadamard on every qubit, each measured into its own classical bit.
fn uniform_circuit(width: u32) -> EngineResult<Circuit> {
    let mut circuit = Circuit::with_size("uniform", width, width)?;
    circuit.h_all()?.measure_all()?;
    Ok(circuit)
}

impl QuantumEngine {
    /// Uniform integer in `[0, 2^num_bits(bound - 1) - 1]`.
    ///
    /// The first register drawn supplies the most significant bits.
    #[instrument(skip(self))]
    pub fn random_int(&self, bound: u64) -> EngineResult<u64> {
        if bound == 0 {
            return Err(EngineError::InvalidArgument(
                "random_int bound must be at least 1".into(),
            ));
        }
        let n_bits = num_bits(bound - 1);
        let sizes = register_sizes(n_bits, self.config().max_qubits);
        debug!("Drawing {} bits in {} registers", n_bits, sizes.len());

        let mut bits = String::with_capacity(n_bits as usize);
        for width in sizes {
            let circuit = uniform_circuit(width)?;
            bits.push_str(&self.sampler().sample_bitstring(&circuit)?);
        }

        u64::from_str_radix(&bits, 2).map_err(|e| {
            EngineError::SimulationFailure(format!("cannot read bitstring '{bits}': {e}"))
        })
    }

    /// Uniform integer in `[0, max_int]`.
    ///
    /// Draws from the enclosing power-of-two range and redraws values above
    /// `max_int`; the expected number of draws is below two.
    #[instrument(skip(self))]
    pub fn generate_random_integer(&self, max_int: u64) -> EngineResult<u64> {
        if max_int == 0 {
            return Err(EngineError::InvalidArgument(
                "maxInt must be a positive integer".into(),
            ));
        }
        let bound = max_int
            .checked_add(1)
            .and_then(next_power_of_2)
            .ok_or_else(|| EngineError::InvalidArgument(format!("maxInt {max_int} is too large")))?;

        loop {
            let value = self.random_int(bound)?;
            if value <= max_int {
                return Ok(value);
            }
            debug!("Rejected {} above {}", value, max_int);
        }
    }
}
