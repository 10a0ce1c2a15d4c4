//! Layered (repeated measurement) decoding tests.
//!
//! Syndromes are supplied layer-major and already differenced round to
//! round, so an isolated measurement error shows up as a defect pair joined
//! by a time-like edge and must aggregate to an all-zero data correction.

mod common;

use veza_core::testing_codes::{chain_3, toric_3x3};
use veza_core::{Arena, DecodeError, DecoderBuilder};

#[test]
fn all_quiet_rounds_decode_to_nothing() {
    let matrix = chain_3();
    let mut buffer = common::buffer_for(&matrix, 3);
    let mut arena = Arena::new(&mut buffer);
    let mut decoder = DecoderBuilder::new()
        .repetitions(3)
        .build(&mut arena, &matrix)
        .unwrap();

    let mut correction = [1u8; 4];
    decoder.decode(&[0; 9], &mut correction).unwrap();
    assert_eq!(correction, [0u8; 4]);
}

#[test]
fn measurement_error_aggregates_to_zero() {
    let matrix = chain_3();
    let mut buffer = common::buffer_for(&matrix, 3);
    let mut arena = Arena::new(&mut buffer);
    let mut decoder = DecoderBuilder::new()
        .repetitions(3)
        .build(&mut arena, &matrix)
        .unwrap();

    // A misread of check 1 after round 0 flips the differenced syndrome in
    // two consecutive layers. No data qubit actually flipped.
    let mut syndrome = [0u8; 9];
    syndrome[1] = 1; // layer 0, check 1
    syndrome[4] = 1; // layer 1, check 1
    let mut correction = [0u8; 4];
    decoder.decode(&syndrome, &mut correction).unwrap();
    assert_eq!(correction, [0u8; 4]);
}

#[test]
fn persistent_data_error_survives_aggregation() {
    let matrix = chain_3();
    let mut buffer = common::buffer_for(&matrix, 3);
    let mut arena = Arena::new(&mut buffer);
    let mut decoder = DecoderBuilder::new()
        .repetitions(3)
        .build(&mut arena, &matrix)
        .unwrap();

    // Qubit 1 flips before the first round and stays flipped: only the
    // first differenced layer sees its two checks light up.
    let mut syndrome = [0u8; 9];
    syndrome[0] = 1;
    syndrome[1] = 1;
    let mut correction = [0u8; 4];
    decoder.decode(&syndrome, &mut correction).unwrap();
    assert_eq!(correction, [0, 1, 0, 0]);
}

#[test]
fn layered_toric_matches_single_layer_result() {
    let matrix = toric_3x3();
    let mut buffer = common::buffer_for(&matrix, 2);
    let mut arena = Arena::new(&mut buffer);
    let mut decoder = DecoderBuilder::new()
        .repetitions(2)
        .build(&mut arena, &matrix)
        .unwrap();

    let mut syndrome = [0u8; 18];
    syndrome[0] = 1;
    syndrome[3] = 1;
    let mut correction = [0u8; 18];
    decoder.decode(&syndrome, &mut correction).unwrap();

    let mut expected = [0u8; 18];
    expected[3] = 1;
    assert_eq!(correction, expected);
}

#[test]
fn layered_syndrome_length_is_checked() {
    let matrix = chain_3();
    let mut buffer = common::buffer_for(&matrix, 3);
    let mut arena = Arena::new(&mut buffer);
    let mut decoder = DecoderBuilder::new()
        .repetitions(3)
        .build(&mut arena, &matrix)
        .unwrap();

    let mut correction = [0u8; 4];
    assert_eq!(
        decoder.decode(&[0; 3], &mut correction),
        Err(DecodeError::SyndromeLength {
            expected: 9,
            got: 3
        })
    );
}

#[test]
fn folded_syndrome_is_reproduced() {
    let matrix = chain_3();
    let mut buffer = common::buffer_for(&matrix, 3);
    let mut arena = Arena::new(&mut buffer);
    let mut decoder = DecoderBuilder::new()
        .repetitions(3)
        .build(&mut arena, &matrix)
        .unwrap();

    // Applying the aggregated correction through the base matrix must
    // reproduce the per-check XOR across layers: time-like edges touch each
    // check column twice and cancel out of the fold.
    let syndrome = [1u8, 0, 0, 0, 1, 0, 1, 0, 1];
    let mut correction = [0u8; 4];
    decoder.decode(&syndrome, &mut correction).unwrap();

    let mut folded = [0u8; 3];
    for layer in 0..3 {
        for check in 0..3 {
            folded[check] ^= syndrome[layer * 3 + check];
        }
    }
    common::verify_correction(&matrix, &folded, &correction).unwrap();
}
