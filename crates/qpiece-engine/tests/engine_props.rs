//! Property tests across the engines.

use std::sync::Arc;

use proptest::prelude::*;
use qpiece_adapter_sim::SimulatorBackend;
use qpiece_engine::{
    Grid, GridCell, QuantumConfig, QuantumEngine, SuperpositionPair, SuperpositionPiece,
    next_power_of_2, num_bits, register_sizes,
};

fn seeded_engine(max_qubits: u32, seed: u64) -> QuantumEngine {
    QuantumEngine::new(
        QuantumConfig::new(max_qubits, "qasm_simulator").unwrap(),
        Arc::new(SimulatorBackend::new().with_seed(seed)),
        Arc::new(SimulatorBackend::statevector()),
    )
    .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_integer_within_bounds(max_int in 1u64..5000, max_qubits in 1u32..8, seed in any::<u64>()) {
        let engine = seeded_engine(max_qubits, seed);
        let value = engine.generate_random_integer(max_int).unwrap();
        prop_assert!(value <= max_int);
    }

    #[test]
    fn register_sizes_cover_every_bit(n_bits in 1u32..200, max_qubits in 1u32..32) {
        let sizes = register_sizes(n_bits, max_qubits);
        prop_assert_eq!(sizes.iter().sum::<u32>(), n_bits);
        prop_assert!(sizes.iter().all(|&s| s >= 1 && s <= max_qubits));
        prop_assert!(sizes[..sizes.len() - 1].iter().all(|&s| s == max_qubits));
    }

    #[test]
    fn num_bits_brackets_value(n in 1u64..u64::MAX) {
        let bits = num_bits(n);
        prop_assert!(n >> (bits - 1) == 1);
    }

    #[test]
    fn next_power_of_2_is_tight(n in 1u64..(1 << 40)) {
        let p = next_power_of_2(n).unwrap();
        prop_assert!(p.is_power_of_two());
        prop_assert!(p >= n);
        prop_assert!(p / 2 < n);
    }

    #[test]
    fn h_prob_stays_in_unit_range(hundredths in 0u32..=100) {
        let prob = f64::from(hundredths) / 100.0;
        let pair = SuperpositionPair {
            piece1: SuperpositionPiece { piece_type: 0, prob },
            piece2: SuperpositionPiece { piece_type: 1, prob: 1.0 - prob },
        };
        let result = seeded_engine(4, 0).determine_h_prob(&pair).unwrap();

        for p in [result.piece1.prob, result.piece2.prob] {
            prop_assert!((0.0..=1.0).contains(&p));
            prop_assert!(((p * 100.0).round() - p * 100.0).abs() < 1e-9);
        }
        // Two independent roundings may drift by one hundredth at most.
        prop_assert!((result.piece1.prob + result.piece2.prob - 1.0).abs() <= 0.01 + 1e-9);
    }

    #[test]
    fn grid_flip_is_an_involution(values in proptest::collection::btree_map("[a-h][1-8]", 0u8..=1, 0..16)) {
        let original: Grid = values
            .into_iter()
            .map(|(k, value)| (k, GridCell::new(value)))
            .collect();
        let engine = seeded_engine(4, 0);

        let mut grid = original.clone();
        engine.flip_entangled_grid(&mut grid).unwrap();
        for (key, cell) in &grid {
            prop_assert_eq!(cell.value, 1 - original[key].value);
        }
        engine.flip_entangled_grid(&mut grid).unwrap();
        prop_assert_eq!(grid, original);
    }
}

#[test]
fn coin_flip_is_roughly_fair() {
    let engine = seeded_engine(4, 2024);
    let draws = 2000;
    let ones = (0..draws)
        .filter(|_| engine.generate_random_integer(1).unwrap() == 1)
        .count();

    // Ten standard deviations around 1000.
    assert!((776..=1224).contains(&ones), "{ones} ones in {draws} draws");
}

#[test]
fn every_die_face_appears() {
    let engine = seeded_engine(2, 99);
    let mut seen = [false; 7];
    for _ in 0..700 {
        seen[engine.generate_random_integer(6).unwrap() as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "{seen:?}");
}

#[test]
fn collapse_frequency_tracks_probability() {
    let engine = seeded_engine(4, 7);
    let zeros = (0..2000)
        .filter(|_| engine.find_superposition(0.8).unwrap() == 0)
        .count();
    assert!((1500..=1700).contains(&zeros), "{zeros} zeros");
}
