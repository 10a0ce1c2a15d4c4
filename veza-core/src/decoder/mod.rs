// =============================================================================
// Decoder Submodules
// =============================================================================

/// Builder pattern for ergonomic decoder construction.
pub mod builder;

/// Immutable decoding graph built from a sparse parity-check matrix.
pub mod graph;

/// Cluster growth algorithms for syndrome spreading.
pub mod growth;

/// Peeling decoder for forest reconstruction and correction extraction.
pub mod peeling;

/// Core decoding state structures.
pub mod state;

/// Union-Find data structure for efficient cluster merging.
pub mod union_find;

// =============================================================================
// Public Re-exports
// =============================================================================

// Builder pattern (ergonomic API)
pub use builder::DecoderBuilder;

// Graph structure and sparse input
pub use graph::{DecodingGraph, SparseIncidence, NO_CHECK};

// DecodingState (from state module)
pub use state::DecodingState;

// Traits (for advanced usage and benchmarks)
pub use growth::ClusterGrowth;
pub use peeling::Peeling;
pub use union_find::UnionFind;
