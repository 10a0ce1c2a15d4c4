//! # veza-core: Union Find Decoder for Sparse Binary Stabilizer Codes
//!
//! `veza-core` is a `no_std`, zero-allocation library implementing a Union Find
//! syndrome decoder for sparse linear binary codes, in particular quantum
//! stabilizer codes such as toric and surface codes.
//!
//! ## Overview
//!
//! A stabilizer code is described by a sparse parity-check relation between
//! *checks* (syndrome bits) and *qubits* (correction bits). Given an observed
//! syndrome, the decoder finds a correction whose parity-check image reproduces
//! that syndrome:
//!
//! 1. **Graph construction** - The sparse incidence description becomes an
//!    immutable graph: vertices are checks, edges are qubits. A qubit touching
//!    a single check becomes a boundary edge.
//! 2. **Cluster growth** - Odd-parity clusters of checks expand one boundary
//!    edge per round, merging through Union Find when they meet, until every
//!    cluster has even parity or has absorbed a boundary.
//! 3. **Peeling** - The spanning forest accumulated during growth is peeled
//!    leaf by leaf, turning per-vertex parity into explicit correction bits.
//!
//! Repeated noisy measurement rounds are handled by stacking graph copies
//! joined with time-like edges and aggregating the result back onto a single
//! layer.
//!
//! ## Quick Start
//!
//! ```ignore
//! use veza_core::{Arena, DecoderBuilder, SparseIncidence, required_buffer_size};
//!
//! // Borrowed column-compressed parity matrix (checks x qubits).
//! let matrix = SparseIncidence {
//!     num_checks: 3,
//!     num_qubits: 4,
//!     indptr: &[0, 1, 3, 5, 6],
//!     check_indices: &[0, 0, 1, 1, 2, 2],
//!     values: &[1, 1, 1, 1, 1, 1],
//! };
//!
//! // All decoder memory comes from a caller-provided buffer.
//! let mut buffer = vec![0u8; required_buffer_size(3, 4, 1)];
//! let mut arena = Arena::new(&mut buffer);
//!
//! let mut decoder = DecoderBuilder::new().build(&mut arena, &matrix)?;
//!
//! let syndrome = [1u8, 0, 0];
//! let mut correction = [0u8; 4];
//! decoder.decode(&syndrome, &mut correction)?;
//! ```
//!
//! ## Module Organization
//!
//! - [`arena`] - Bump allocator for `no_std` memory management
//! - [`decoder`] - Core decoding logic (graph, Union Find, growth, peeling)
//! - [`engine`] - High-level [`Decoder`] entry point
//! - [`error`] - Construction and decode error taxonomy
//! - [`testing_codes`] - Canonical parity matrices for tests and examples

#![no_std]
#![deny(missing_docs)]

// =============================================================================
// Module Declarations
// =============================================================================

/// Arena-based memory allocator for no_std environments.
pub mod arena;

/// Core decoder types, traits, and implementations.
pub mod decoder;

/// High-level decoder entry point.
pub mod engine;

/// Error taxonomy for construction and decoding.
pub mod error;

/// Canonical parity-check matrices used by tests and examples.
pub mod testing_codes;

// =============================================================================
// Convenience Re-exports (Clean Public API)
// =============================================================================

// Memory allocation and sizing
pub use arena::{required_buffer_size, Arena};

// Construction
pub use decoder::{DecoderBuilder, DecodingGraph, SparseIncidence, NO_CHECK};

// Session state (for granular use and diagnostics)
pub use decoder::DecodingState;

// Decoder traits (for advanced users and benchmarks)
pub use decoder::{ClusterGrowth, Peeling, UnionFind};

// High-level engine
pub use engine::Decoder;

// Errors
pub use error::{BuildError, DecodeError};
