//! Error taxonomy for decoder construction and decoding.
//!
//! Two disjoint error enums mirror the two phases of the API: everything that
//! can go wrong while validating input and building the graph is a
//! [`BuildError`]; everything that can go wrong inside a decode call is a
//! [`DecodeError`]. Both are plain `Copy` values suitable for `no_std` use.

use core::fmt;

/// Errors raised while validating a sparse matrix and constructing a decoder.
///
/// A build failure is unrecoverable for the attempted configuration: the
/// caller must fix the input (or enlarge the arena buffer) and rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// The sparse description is structurally invalid or stores a value
    /// other than 1.
    InvalidMatrix(&'static str),
    /// The incidence references an out-of-range check, or a qubit column has
    /// an unsupported degree.
    MalformedGraph(&'static str),
    /// A builder parameter is outside its accepted range.
    InvalidConfig(&'static str),
    /// The arena buffer cannot hold the decoder's data structures.
    ArenaTooSmall,
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidMatrix(msg) => write!(f, "invalid sparse matrix: {msg}"),
            BuildError::MalformedGraph(msg) => write!(f, "malformed decoding graph: {msg}"),
            BuildError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            BuildError::ArenaTooSmall => write!(f, "arena buffer too small for decoder"),
        }
    }
}

/// Errors raised by a single decode call.
///
/// A failed call never leaves a partial correction in the output buffer and
/// never corrupts later calls; the session is rebuilt from scratch on the
/// next `decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The syndrome length does not match the configured mode
    /// (`num_checks`, or `num_checks * repetitions` in layered mode).
    SyndromeLength {
        /// Length required by the decoder configuration.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
    /// The correction buffer length does not equal the qubit count.
    CorrectionLength {
        /// Length required by the decoder configuration.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },
    /// An odd cluster exhausted its boundary queue: the instance is
    /// disconnected or genuinely unsatisfiable.
    UnresolvedSyndrome {
        /// Root check of the cluster that could not be resolved.
        check: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::SyndromeLength { expected, got } => {
                write!(f, "syndrome length {got} does not match expected {expected}")
            }
            DecodeError::CorrectionLength { expected, got } => {
                write!(f, "correction length {got} does not match expected {expected}")
            }
            DecodeError::UnresolvedSyndrome { check } => {
                write!(f, "cluster rooted at check {check} cannot be resolved")
            }
        }
    }
}
