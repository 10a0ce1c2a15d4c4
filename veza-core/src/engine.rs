//! High-level decoder entry point.
//!
//! [`Decoder`] owns a [`DecodingState`] and runs the full pipeline per call:
//! reset, syndrome load, cluster growth, peeling, and (in layered mode)
//! aggregation of per-layer corrections onto the base qubits. Callers that
//! want to drive the phases individually can reach through
//! [`state`](Decoder::state) and use the phase traits directly.

use crate::decoder::growth::ClusterGrowth;
use crate::decoder::peeling::Peeling;
use crate::decoder::state::DecodingState;
use crate::error::DecodeError;

/// A ready-to-use Union Find decoder.
///
/// Construct through [`DecoderBuilder`](crate::DecoderBuilder). Each
/// [`decode`](Self::decode) call is independent: the session state is
/// rebuilt from scratch at the start of the call, so a failed call never
/// poisons the next one.
#[derive(Debug)]
pub struct Decoder<'a> {
    /// Session state, exposed for phase-level access and diagnostics.
    pub state: DecodingState<'a>,
}

impl<'a> Decoder<'a> {
    pub(crate) fn from_state(state: DecodingState<'a>) -> Self {
        Self { state }
    }

    /// Decodes one syndrome into a correction.
    ///
    /// In single-layer mode `syndrome` has one bit per check and
    /// `correction` one bit per qubit. In layered mode `syndrome` holds
    /// `num_checks * repetitions` entries (the caller supplies the
    /// round-to-round differenced measurements, layer-major) and the
    /// correction is still one bit per base qubit: space-like corrections
    /// from all layers are XOR-aggregated per qubit and time-like edges are
    /// discarded.
    ///
    /// The output buffer is written only on success; on error it is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// * [`DecodeError::SyndromeLength`] - `syndrome` length mismatch.
    /// * [`DecodeError::CorrectionLength`] - `correction` length mismatch.
    /// * [`DecodeError::UnresolvedSyndrome`] - A defect cluster spans a
    ///   whole connected component and still has odd parity.
    pub fn decode(&mut self, syndrome: &[u8], correction: &mut [u8]) -> Result<(), DecodeError> {
        let expected_syndrome = self.state.graph.num_vertices;
        if syndrome.len() != expected_syndrome {
            return Err(DecodeError::SyndromeLength {
                expected: expected_syndrome,
                got: syndrome.len(),
            });
        }
        let num_qubits = self.state.graph.num_qubits;
        if correction.len() != num_qubits {
            return Err(DecodeError::CorrectionLength {
                expected: num_qubits,
                got: correction.len(),
            });
        }

        self.state.reset();
        self.state.load_syndromes(syndrome);
        self.state.grow_clusters()?;
        self.state.peel_forest();

        for (q, out) in correction.iter_mut().enumerate() {
            let mut bit = 0u8;
            for layer in 0..self.state.graph.repetitions {
                let edge = (layer * num_qubits + q) as u32;
                bit ^= self.state.correction_bit(edge);
            }
            *out = bit;
        }
        Ok(())
    }

    /// Reinitializes the session state without decoding.
    ///
    /// [`decode`](Self::decode) resets automatically; this is only needed
    /// when driving the phase traits by hand.
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Number of checks per measurement round.
    #[must_use]
    pub fn num_checks(&self) -> usize {
        self.state.graph.num_checks
    }

    /// Number of qubits (correction bits).
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.state.graph.num_qubits
    }

    /// Number of stacked measurement rounds.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.state.graph.repetitions
    }

    /// Expected syndrome slice length (`num_checks * repetitions`).
    #[must_use]
    pub fn syndrome_len(&self) -> usize {
        self.state.graph.num_vertices
    }
}
