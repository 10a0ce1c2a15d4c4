//! Builder pattern for decoder construction.
//!
//! The builder front-loads all input validation: a [`SparseIncidence`] that
//! passes [`build`](DecoderBuilder::build) is guaranteed structurally sound,
//! so the graph constructor and the decode loop never re-check it.
//!
//! # Example
//!
//! ```ignore
//! use veza_core::{Arena, DecoderBuilder, required_buffer_size};
//! use veza_core::testing_codes::toric_3x3;
//!
//! let matrix = toric_3x3();
//! let mut buffer = vec![0u8; required_buffer_size(9, 18, 1)];
//! let mut arena = Arena::new(&mut buffer);
//!
//! let mut decoder = DecoderBuilder::new().build(&mut arena, &matrix)?;
//! ```

use crate::arena::Arena;
use crate::decoder::graph::{DecodingGraph, SparseIncidence};
use crate::decoder::state::DecodingState;
use crate::engine::Decoder;
use crate::error::BuildError;

/// Builder for constructing [`Decoder`] instances.
///
/// The only tunable is the number of stacked measurement rounds; everything
/// else is derived from the matrix.
#[derive(Debug, Clone, Copy)]
pub struct DecoderBuilder {
    repetitions: usize,
}

impl DecoderBuilder {
    /// Creates a builder configured for single-layer decoding.
    #[must_use]
    pub const fn new() -> Self {
        Self { repetitions: 1 }
    }

    /// Sets the number of stacked measurement rounds.
    ///
    /// With `reps > 1` the decoder expects a differenced syndrome of length
    /// `num_checks * reps` and aggregates per-layer corrections back onto
    /// the base qubits. A value of 0 is rejected at build time.
    #[must_use]
    pub const fn repetitions(mut self, reps: usize) -> Self {
        self.repetitions = reps;
        self
    }

    /// Validates the matrix and constructs a ready-to-use decoder.
    ///
    /// # Arguments
    ///
    /// * `arena` - Allocator holding all decoder memory. Size it with
    ///   [`required_buffer_size`](crate::arena::required_buffer_size).
    /// * `matrix` - Column-compressed parity-check matrix.
    ///
    /// # Errors
    ///
    /// * [`BuildError::InvalidConfig`] - `repetitions` is 0.
    /// * [`BuildError::InvalidMatrix`] - The sparse description is
    ///   structurally inconsistent or stores a value other than 1.
    /// * [`BuildError::MalformedGraph`] - A check index is out of range, a
    ///   qubit column has a degree other than 1 or 2, or a column repeats a
    ///   check.
    /// * [`BuildError::ArenaTooSmall`] - The buffer cannot hold the decoder.
    pub fn build<'a>(
        self,
        arena: &mut Arena<'a>,
        matrix: &SparseIncidence<'_>,
    ) -> Result<Decoder<'a>, BuildError> {
        if self.repetitions == 0 {
            return Err(BuildError::InvalidConfig("repetitions must be at least 1"));
        }
        validate(matrix)?;

        let graph = DecodingGraph::build(arena, matrix, self.repetitions)?;
        let state = DecodingState::new(arena, graph)?;
        Ok(Decoder::from_state(state))
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks the sparse matrix for structural soundness.
fn validate(matrix: &SparseIncidence<'_>) -> Result<(), BuildError> {
    if matrix.num_checks == 0 || matrix.num_qubits == 0 {
        return Err(BuildError::InvalidMatrix(
            "matrix must have at least one check and one qubit",
        ));
    }
    if matrix.indptr.len() != matrix.num_qubits + 1 {
        return Err(BuildError::InvalidMatrix(
            "indptr length must be num_qubits + 1",
        ));
    }
    if matrix.indptr[0] != 0 {
        return Err(BuildError::InvalidMatrix("indptr must start at 0"));
    }
    for q in 0..matrix.num_qubits {
        if matrix.indptr[q + 1] < matrix.indptr[q] {
            return Err(BuildError::InvalidMatrix("indptr must be non-decreasing"));
        }
    }
    let nnz = matrix.indptr[matrix.num_qubits];
    if matrix.check_indices.len() != nnz {
        return Err(BuildError::InvalidMatrix(
            "check_indices length must match indptr",
        ));
    }
    if matrix.values.len() != nnz {
        return Err(BuildError::InvalidMatrix(
            "values length must match indptr",
        ));
    }
    // Only plain binary matrices are supported. An explicit zero (or an
    // inverted-convention matrix storing zeros for set entries) is rejected
    // rather than silently reinterpreted.
    if matrix.values.iter().any(|&v| v != 1) {
        return Err(BuildError::InvalidMatrix(
            "stored values must all be 1",
        ));
    }

    for q in 0..matrix.num_qubits {
        let start = matrix.indptr[q];
        let end = matrix.indptr[q + 1];
        let degree = end - start;
        if degree != 1 && degree != 2 {
            return Err(BuildError::MalformedGraph(
                "qubit column degree must be 1 or 2",
            ));
        }
        for &check in &matrix.check_indices[start..end] {
            if check >= matrix.num_checks {
                return Err(BuildError::MalformedGraph("check index out of range"));
            }
        }
        if degree == 2 && matrix.check_indices[start] == matrix.check_indices[start + 1] {
            return Err(BuildError::MalformedGraph(
                "qubit column repeats a check",
            ));
        }
    }

    Ok(())
}
