//! Shared test utilities for veza-core tests.
//!
//! This module provides common helper functions used across multiple test
//! files to verify decoder output and generate parity-check matrices.

#![allow(dead_code)] // Not all test files use all functions

use veza_core::{required_buffer_size, SparseIncidence};

/// Applies a correction through the parity-check matrix.
///
/// Returns the syndrome the correction reproduces: check `c` is set iff an
/// odd number of flipped qubits touch it.
pub fn apply_correction(matrix: &SparseIncidence<'_>, correction: &[u8]) -> Vec<u8> {
    let mut reproduced = vec![0u8; matrix.num_checks];
    for (q, &bit) in correction.iter().enumerate() {
        if bit != 0 {
            for &check in &matrix.check_indices[matrix.indptr[q]..matrix.indptr[q + 1]] {
                reproduced[check] ^= 1;
            }
        }
    }
    reproduced
}

/// Verifies that a correction reproduces the given syndrome exactly.
///
/// Returns `Ok(())` on success, `Err` with the mismatched check indices
/// otherwise.
pub fn verify_correction(
    matrix: &SparseIncidence<'_>,
    syndrome: &[u8],
    correction: &[u8],
) -> Result<(), Vec<usize>> {
    let reproduced = apply_correction(matrix, correction);
    let mismatched: Vec<usize> = (0..matrix.num_checks)
        .filter(|&c| reproduced[c] != (syndrome[c] != 0) as u8)
        .collect();
    if mismatched.is_empty() {
        Ok(())
    } else {
        Err(mismatched)
    }
}

/// Verifies a correction and returns a boolean (for proptest assertions).
#[inline]
pub fn verify_correction_bool(
    matrix: &SparseIncidence<'_>,
    syndrome: &[u8],
    correction: &[u8],
) -> bool {
    verify_correction(matrix, syndrome, correction).is_ok()
}

/// Allocates an arena buffer sized for the given matrix and mode.
pub fn buffer_for(matrix: &SparseIncidence<'_>, repetitions: usize) -> Vec<u8> {
    vec![
        0u8;
        required_buffer_size(matrix.num_checks, matrix.num_qubits, repetitions)
    ]
}

/// Owning variant of [`SparseIncidence`] for generated matrices.
pub struct OwnedMatrix {
    pub num_checks: usize,
    pub num_qubits: usize,
    pub indptr: Vec<usize>,
    pub check_indices: Vec<usize>,
    pub values: Vec<u8>,
}

impl OwnedMatrix {
    /// Borrows the owned arrays as a [`SparseIncidence`].
    pub fn as_incidence(&self) -> SparseIncidence<'_> {
        SparseIncidence {
            num_checks: self.num_checks,
            num_qubits: self.num_qubits,
            indptr: &self.indptr,
            check_indices: &self.check_indices,
            values: &self.values,
        }
    }
}

/// Repetition-code chain of `n` checks with a boundary qubit at each end.
///
/// Qubit 0 touches only check 0, qubit `n` only check `n - 1`, and qubit
/// `j` (for `1 <= j < n`) joins checks `j - 1` and `j`.
pub fn repetition_chain(n: usize) -> OwnedMatrix {
    let mut indptr = vec![0usize];
    let mut check_indices = Vec::new();

    check_indices.push(0);
    indptr.push(check_indices.len());
    for j in 1..n {
        check_indices.push(j - 1);
        check_indices.push(j);
        indptr.push(check_indices.len());
    }
    check_indices.push(n - 1);
    indptr.push(check_indices.len());

    let values = vec![1u8; check_indices.len()];
    OwnedMatrix {
        num_checks: n,
        num_qubits: n + 1,
        indptr,
        check_indices,
        values,
    }
}

/// Closed repetition-code ring of `n` checks and `n` qubits.
///
/// Qubit `j` joins checks `j` and `(j + n - 1) % n`; there are no boundary
/// qubits.
pub fn repetition_ring(n: usize) -> OwnedMatrix {
    let mut indptr = vec![0usize];
    let mut check_indices = Vec::new();

    for j in 0..n {
        let a = j;
        let b = (j + n - 1) % n;
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        check_indices.push(lo);
        check_indices.push(hi);
        indptr.push(check_indices.len());
    }

    let values = vec![1u8; check_indices.len()];
    OwnedMatrix {
        num_checks: n,
        num_qubits: n,
        indptr,
        check_indices,
        values,
    }
}
