//! Two-outcome game-piece superpositions.

use qpiece_ir::{Circuit, QubitId};
use rust_decimal::prelude::{Decimal, RoundingStrategy, ToPrimitive};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::engine::QuantumEngine;
use crate::error::{EngineError, EngineResult};

/// Highest piece type; types are drawn from `0..=MAX_PIECE_TYPE`.
pub const MAX_PIECE_TYPE: u64 = 5;

/// One side of a superposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperpositionPiece {
    #[serde(rename = "type")]
    pub piece_type: u8,
    pub prob: f64,
}

/// A weighted pair of distinct piece types.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuperpositionPair {
    pub piece1: SuperpositionPiece,
    pub piece2: SuperpositionPiece,
}

/// Rx angle whose |0⟩ outcome has probability `prob`.
fn rotation_angle(prob: f64) -> EngineResult<f64> {
    if !(0.0..=1.0).contains(&prob) {
        return Err(EngineError::InvalidArgument(format!(
            "probability {prob} is outside [0, 1]"
        )));
    }
    Ok(2.0 * prob.sqrt().acos())
}

/// Round the exact decimal value of `value` to `dp` places, ties to even.
pub fn round_half_even(value: f64, dp: u32) -> EngineResult<f64> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .ok_or_else(|| EngineError::SimulationFailure(format!("cannot round {value}")))
}

impl QuantumEngine {
    /// Draw a random pair: a probability in hundredths and two distinct types.
    #[instrument(skip(self))]
    pub fn create_pieces(&self) -> EngineResult<SuperpositionPair> {
        let probability1 = self.generate_random_integer(100)? as f64 / 100.0;
        let probability2 = 1.0 - probability1;

        let type1 = self.random_piece_type()?;
        let mut type2 = self.random_piece_type()?;
        while type2 == type1 {
            type2 = self.random_piece_type()?;
        }

        Ok(SuperpositionPair {
            piece1: SuperpositionPiece {
                piece_type: type1,
                prob: probability1,
            },
            piece2: SuperpositionPiece {
                piece_type: type2,
                prob: probability2,
            },
        })
    }

    fn random_piece_type(&self) -> EngineResult<u8> {
        let value = self.generate_random_integer(MAX_PIECE_TYPE)?;
        u8::try_from(value)
            .map_err(|_| EngineError::SimulationFailure(format!("piece type {value} out of range")))
    }

    /// Collapse a superposition: `0` with probability `prob`, else `1`.
    #[instrument(skip(self))]
    pub fn find_superposition(&self, prob: f64) -> EngineResult<u8> {
        let theta = rotation_angle(prob)?;

        let mut circuit = Circuit::with_size("collapse", 1, 1)?;
        circuit.rx(theta, QubitId(0))?.measure_all()?;

        Ok(self.sampler().sample_bit(&circuit)?.as_u8())
    }

    /// Re-weight a pair through Rx(θ), Rz(θ), H with θ taken from `piece1`.
    ///
    /// `piece1.prob` becomes |amplitude of |1⟩|² rounded to two places and
    /// `piece2.prob` is one minus that, rounded again. The two are not
    /// guaranteed to sum to one exactly.
    #[instrument(skip(self))]
    pub fn determine_h_prob(&self, pair: &SuperpositionPair) -> EngineResult<SuperpositionPair> {
        let theta = rotation_angle(pair.piece1.prob)?;

        let mut circuit = Circuit::with_size("reweight", 1, 1)?;
        circuit.rx(theta, QubitId(0))?.rz(theta, QubitId(0))?.h(QubitId(0))?;

        let statevector = self.statevector(&circuit)?;
        let p = statevector.probability(1).ok_or_else(|| {
            EngineError::SimulationFailure("statevector has no |1⟩ amplitude".into())
        })?;
        debug!("Amplitude probability of |1⟩: {}", p);

        let piece1_prob = round_half_even(p, 2)?;
        let piece2_prob = round_half_even(1.0 - piece1_prob, 2)?;

        Ok(SuperpositionPair {
            piece1: SuperpositionPiece {
                prob: piece1_prob,
                ..pair.piece1
            },
            piece2: SuperpositionPiece {
                prob: piece2_prob,
                ..pair.piece2
            },
        })
    }
}
