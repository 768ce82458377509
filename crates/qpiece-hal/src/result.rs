//! Execution results: measurement counts and raw amplitudes.

use num_complex::Complex64;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Observed bitstrings and how often each occurred.
///
/// Bitstrings list classical bits from the highest index on the left down to
/// classical bit 0 on the right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty count table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` occurrences of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Occurrences of `bitstring`, zero when it was never observed.
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of recorded shots.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// Iterate over `(bitstring, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// The bitstring observed exactly once, when the table holds one shot.
    pub fn single_shot(&self) -> Option<&str> {
        self.iter()
            .find(|&(_, count)| count == 1)
            .map(|(bitstring, _)| bitstring)
    }
}

impl FromIterator<(String, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (bitstring, count) in iter {
            counts.insert(bitstring, count);
        }
        counts
    }
}

/// Result of a shot-based run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measured bitstrings.
    pub counts: Counts,
    /// Number of shots taken.
    pub shots: u32,
    /// Wall-clock simulation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result from counts.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the simulation time.
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }
}

/// Amplitudes of a pure state. Bit `k` of an index is qubit `k`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statevector {
    /// Complex amplitudes, `2^n` entries.
    pub amplitudes: Vec<Complex64>,
}

impl Statevector {
    /// Wrap a list of amplitudes.
    pub fn new(amplitudes: Vec<Complex64>) -> Self {
        Self { amplitudes }
    }

    /// Amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> Option<Complex64> {
        self.amplitudes.get(index).copied()
    }

    /// Probability of basis state `index`, computed as `a * conj(a)`.
    pub fn probability(&self, index: usize) -> Option<f64> {
        self.amplitude(index).map(|a| (a * a.conj()).re)
    }

    /// Number of qubits the vector describes.
    pub fn num_qubits(&self) -> u32 {
        self.amplitudes.len().trailing_zeros()
    }
}

/// A single measured classical bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeasuredBit {
    /// Outcome `0`.
    Zero,
    /// Outcome `1`.
    One,
}

impl MeasuredBit {
    /// The bit as an integer.
    pub fn as_u8(self) -> u8 {
        match self {
            MeasuredBit::Zero => 0,
            MeasuredBit::One => 1,
        }
    }
}

impl From<bool> for MeasuredBit {
    fn from(bit: bool) -> Self {
        if bit { MeasuredBit::One } else { MeasuredBit::Zero }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("01", 3);
        counts.insert("01", 2);
        counts.insert("11", 1);

        assert_eq!(counts.get("01"), 5);
        assert_eq!(counts.get("00"), 0);
        assert_eq!(counts.total(), 6);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_single_shot() {
        let counts: Counts = [("101".to_string(), 1)].into_iter().collect();
        assert_eq!(counts.single_shot(), Some("101"));
        assert_eq!(Counts::new().single_shot(), None);
    }

    #[test]
    fn test_counts_serialize_as_map() {
        let counts: Counts = [("0".to_string(), 1)].into_iter().collect();
        assert_eq!(serde_json::to_string(&counts).unwrap(), r#"{"0":1}"#);
    }

    #[test]
    fn test_statevector_probability() {
        let h = std::f64::consts::FRAC_1_SQRT_2;
        let sv = Statevector::new(vec![Complex64::new(h, 0.0), Complex64::new(0.0, -h)]);
        assert_eq!(sv.num_qubits(), 1);
        assert!((sv.probability(1).unwrap() - 0.5).abs() < 1e-12);
        assert!(sv.probability(2).is_none());
    }

    #[test]
    fn test_measured_bit() {
        assert_eq!(MeasuredBit::from(true), MeasuredBit::One);
        assert_eq!(MeasuredBit::Zero.as_u8(), 0);
    }
}
