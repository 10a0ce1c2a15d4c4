//! Canonical parity-check matrices used by tests, benchmarks, and examples.
//!
//! Each fixture returns a [`SparseIncidence`] borrowing `'static` arrays, so
//! no allocation or setup is needed. The toric layout follows the standard
//! 3x3 X-stabilizer construction; the chain and ring fixtures are the
//! smallest useful codes with and without open boundaries.

use crate::decoder::graph::SparseIncidence;

// =============================================================================
// 3x3 Toric Code (X Stabilizers)
// =============================================================================

/// Checks in the 3x3 toric fixture.
pub const TORIC_3X3_CHECKS: usize = 9;
/// Qubits in the 3x3 toric fixture.
pub const TORIC_3X3_QUBITS: usize = 18;

const TORIC_3X3_INDPTR: [usize; 19] = [
    0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36,
];

#[rustfmt::skip]
const TORIC_3X3_CHECK_INDICES: [usize; 36] = [
    0, 1,   1, 2,   0, 2,
    0, 3,   1, 4,   2, 5,
    3, 4,   4, 5,   3, 5,
    3, 6,   4, 7,   5, 8,
    6, 7,   7, 8,   6, 8,
    0, 6,   1, 7,   2, 8,
];

const TORIC_3X3_VALUES: [u8; 36] = [1; 36];

/// X-stabilizer parity-check matrix of the 3x3 toric code.
///
/// 9 plaquette checks over 18 qubits; every qubit touches exactly two
/// checks, so the decoding graph is closed (no boundary edges).
#[must_use]
pub fn toric_3x3() -> SparseIncidence<'static> {
    SparseIncidence {
        num_checks: TORIC_3X3_CHECKS,
        num_qubits: TORIC_3X3_QUBITS,
        indptr: &TORIC_3X3_INDPTR,
        check_indices: &TORIC_3X3_CHECK_INDICES,
        values: &TORIC_3X3_VALUES,
    }
}

// =============================================================================
// Length-3 Repetition Chain (Open Boundaries)
// =============================================================================

/// Checks in the chain fixture.
pub const CHAIN_3_CHECKS: usize = 3;
/// Qubits in the chain fixture.
pub const CHAIN_3_QUBITS: usize = 4;

const CHAIN_3_INDPTR: [usize; 5] = [0, 1, 3, 5, 6];
const CHAIN_3_CHECK_INDICES: [usize; 6] = [0, 0, 1, 1, 2, 2];
const CHAIN_3_VALUES: [u8; 6] = [1; 6];

/// Repetition-code chain with a boundary qubit at each end.
///
/// Qubits 0 and 3 touch a single check each and become boundary edges;
/// qubits 1 and 2 join consecutive checks.
#[must_use]
pub fn chain_3() -> SparseIncidence<'static> {
    SparseIncidence {
        num_checks: CHAIN_3_CHECKS,
        num_qubits: CHAIN_3_QUBITS,
        indptr: &CHAIN_3_INDPTR,
        check_indices: &CHAIN_3_CHECK_INDICES,
        values: &CHAIN_3_VALUES,
    }
}

// =============================================================================
// Length-4 Repetition Ring (Closed, No Boundaries)
// =============================================================================

/// Checks in the ring fixture.
pub const RING_4_CHECKS: usize = 4;
/// Qubits in the ring fixture.
pub const RING_4_QUBITS: usize = 4;

const RING_4_INDPTR: [usize; 5] = [0, 2, 4, 6, 8];

#[rustfmt::skip]
const RING_4_CHECK_INDICES: [usize; 8] = [
    0, 3,   0, 1,   1, 2,   2, 3,
];

const RING_4_VALUES: [u8; 8] = [1; 8];

/// Closed repetition-code ring of four checks and four qubits.
///
/// Has no boundary edges, so a lone defect can never be matched and must
/// surface as an unresolved syndrome.
#[must_use]
pub fn ring_4() -> SparseIncidence<'static> {
    SparseIncidence {
        num_checks: RING_4_CHECKS,
        num_qubits: RING_4_QUBITS,
        indptr: &RING_4_INDPTR,
        check_indices: &RING_4_CHECK_INDICES,
        values: &RING_4_VALUES,
    }
}
