//! Immutable decoding graph built once from a sparse parity-check matrix.
//!
//! The graph is the read-only half of the decoder: vertices are checks, edges
//! are qubits, and a qubit touching a single check becomes a boundary edge.
//! All arrays live in the caller's arena and are shared by every decode call.
//!
//! For layered (repeated measurement) decoding the base graph is replicated
//! once per round and consecutive copies of the same check are joined by
//! time-like edges. The layout is layer-major so that layer `k` of the
//! vertices occupies indices `k * num_checks .. (k + 1) * num_checks`.

use crate::arena::Arena;
use crate::error::BuildError;

/// Sentinel endpoint for the open side of a boundary edge.
///
/// A boundary edge stores `NO_CHECK` as its second endpoint. No valid check
/// index can collide with it because check counts are far below `u32::MAX`.
pub const NO_CHECK: u32 = u32::MAX;

/// Borrowed column-compressed view of a sparse parity-check matrix.
///
/// The matrix has `num_checks` rows and `num_qubits` columns. Column `q`
/// occupies `check_indices[indptr[q]..indptr[q + 1]]` and lists the checks
/// that qubit `q` participates in. `values` runs parallel to `check_indices`
/// and must contain only ones; an explicitly stored zero or any other value
/// is rejected at build time.
///
/// The decoder borrows the slices for the duration of the build only; the
/// graph keeps its own arena-resident copy of everything it needs.
#[derive(Debug, Clone, Copy)]
pub struct SparseIncidence<'m> {
    /// Number of checks (rows).
    pub num_checks: usize,
    /// Number of qubits (columns).
    pub num_qubits: usize,
    /// Column pointers, length `num_qubits + 1`, non-decreasing.
    pub indptr: &'m [usize],
    /// Row index of each stored entry, length `indptr[num_qubits]`.
    pub check_indices: &'m [usize],
    /// Stored values, parallel to `check_indices`. Must all be 1.
    pub values: &'m [u8],
}

/// Immutable decoding graph shared by every decode session.
///
/// Edges are indexed qubit-major: in layered mode edge `k * num_qubits + q`
/// is the copy of qubit `q` in layer `k`, and time-like edges follow all
/// space-like edges starting at index `num_space_edges`.
///
/// Incidence is stored CSR-style: the edges incident to vertex `v` are
/// `vertex_edges[vertex_offsets[v]..vertex_offsets[v + 1]]`. The same slot
/// indices double as boundary-queue entries in the mutable decoding state.
#[derive(Debug, Clone, Copy)]
pub struct DecodingGraph<'a> {
    /// Edge endpoints, two per edge: `[e0a, e0b, e1a, e1b, ..]`. Boundary
    /// edges store [`NO_CHECK`] as their second endpoint.
    pub edge_checks: &'a [u32],
    /// CSR offsets into [`Self::vertex_edges`], length `num_vertices + 1`.
    pub vertex_offsets: &'a [u32],
    /// CSR incidence entries: edge index per (vertex, edge) slot.
    pub vertex_edges: &'a [u32],
    /// Total vertices across all layers (`num_checks * repetitions`).
    pub num_vertices: usize,
    /// Total edges across all layers, space-like plus time-like.
    pub num_edges: usize,
    /// Checks per layer (rows of the base matrix).
    pub num_checks: usize,
    /// Qubits per layer (columns of the base matrix).
    pub num_qubits: usize,
    /// Number of stacked measurement rounds (1 for single-layer mode).
    pub repetitions: usize,
    /// Number of space-like edges (`num_qubits * repetitions`). Edges at or
    /// above this index are time-like.
    pub num_space_edges: usize,
}

impl<'a> DecodingGraph<'a> {
    /// Builds the graph from a validated sparse matrix.
    ///
    /// The matrix must already have passed
    /// [`DecoderBuilder`](crate::decoder::builder::DecoderBuilder) validation:
    /// this function assumes structural sanity (monotone `indptr`, in-range
    /// check indices, column degrees of 1 or 2) and only reports arena
    /// exhaustion.
    ///
    /// # Arguments
    ///
    /// * `arena` - Allocator providing graph memory.
    /// * `matrix` - Column-compressed parity-check matrix.
    /// * `repetitions` - Number of stacked measurement rounds, at least 1.
    pub fn build(
        arena: &mut Arena<'a>,
        matrix: &SparseIncidence<'_>,
        repetitions: usize,
    ) -> Result<Self, BuildError> {
        let num_checks = matrix.num_checks;
        let num_qubits = matrix.num_qubits;
        let num_vertices = num_checks * repetitions;
        let num_space_edges = num_qubits * repetitions;
        let num_time_edges = num_checks * (repetitions - 1);
        let num_edges = num_space_edges + num_time_edges;

        let edge_checks = arena
            .alloc_slice::<u32>(2 * num_edges)
            .map_err(|_| BuildError::ArenaTooSmall)?;

        // Space-like edges: one copy of each qubit column per layer, with
        // endpoints shifted into that layer's vertex range.
        for layer in 0..repetitions {
            let vertex_base = (layer * num_checks) as u32;
            for qubit in 0..num_qubits {
                let edge = layer * num_qubits + qubit;
                let start = matrix.indptr[qubit];
                let end = matrix.indptr[qubit + 1];
                let a = matrix.check_indices[start] as u32 + vertex_base;
                let b = if end - start == 2 {
                    matrix.check_indices[start + 1] as u32 + vertex_base
                } else {
                    NO_CHECK
                };
                edge_checks[2 * edge] = a;
                edge_checks[2 * edge + 1] = b;
            }
        }

        // Time-like edges join the same check across consecutive layers.
        for layer in 0..repetitions.saturating_sub(1) {
            for check in 0..num_checks {
                let edge = num_space_edges + layer * num_checks + check;
                edge_checks[2 * edge] = (layer * num_checks + check) as u32;
                edge_checks[2 * edge + 1] = ((layer + 1) * num_checks + check) as u32;
            }
        }

        let vertex_offsets = arena
            .alloc_slice::<u32>(num_vertices + 1)
            .map_err(|_| BuildError::ArenaTooSmall)?;
        for slot in vertex_offsets.iter_mut() {
            *slot = 0;
        }

        // Count incidences per vertex, shifted by one so the prefix sum
        // lands directly in offset position.
        for edge in 0..num_edges {
            for side in 0..2 {
                let v = edge_checks[2 * edge + side];
                if v != NO_CHECK {
                    vertex_offsets[v as usize + 1] += 1;
                }
            }
        }
        for v in 0..num_vertices {
            vertex_offsets[v + 1] += vertex_offsets[v];
        }

        let num_slots = vertex_offsets[num_vertices] as usize;
        let vertex_edges = arena
            .alloc_slice::<u32>(num_slots)
            .map_err(|_| BuildError::ArenaTooSmall)?;

        // Fill using the offsets as write cursors, then walk them back.
        for edge in 0..num_edges {
            for side in 0..2 {
                let v = edge_checks[2 * edge + side];
                if v != NO_CHECK {
                    let cursor = &mut vertex_offsets[v as usize];
                    vertex_edges[*cursor as usize] = edge as u32;
                    *cursor += 1;
                }
            }
        }
        for v in (1..=num_vertices).rev() {
            vertex_offsets[v] = vertex_offsets[v - 1];
        }
        vertex_offsets[0] = 0;

        Ok(Self {
            edge_checks,
            vertex_offsets,
            vertex_edges,
            num_vertices,
            num_edges,
            num_checks,
            num_qubits,
            repetitions,
            num_space_edges,
        })
    }

    /// Returns both endpoints of an edge. The second endpoint is [`NO_CHECK`]
    /// for boundary edges.
    #[inline]
    #[must_use]
    pub fn endpoints(&self, edge: u32) -> (u32, u32) {
        let e = edge as usize;
        (self.edge_checks[2 * e], self.edge_checks[2 * e + 1])
    }

    /// Returns the endpoint of `edge` opposite to `vertex`.
    #[inline]
    #[must_use]
    pub fn other_endpoint(&self, edge: u32, vertex: u32) -> u32 {
        let (a, b) = self.endpoints(edge);
        if a == vertex {
            b
        } else {
            a
        }
    }

    /// Returns the CSR slot range of edges incident to `vertex`.
    #[inline]
    #[must_use]
    pub fn incidence_range(&self, vertex: u32) -> (usize, usize) {
        let v = vertex as usize;
        (
            self.vertex_offsets[v] as usize,
            self.vertex_offsets[v + 1] as usize,
        )
    }

    /// Returns the edge indices incident to `vertex`.
    #[inline]
    #[must_use]
    pub fn incident_edges(&self, vertex: u32) -> &'a [u32] {
        let (start, end) = self.incidence_range(vertex);
        &self.vertex_edges[start..end]
    }

    /// Returns `true` if `edge` has an open (boundary) endpoint.
    #[inline]
    #[must_use]
    pub fn is_boundary_edge(&self, edge: u32) -> bool {
        self.edge_checks[2 * edge as usize + 1] == NO_CHECK
    }

    /// Returns `true` if `edge` is time-like (joins two layers).
    #[inline]
    #[must_use]
    pub fn is_time_edge(&self, edge: u32) -> bool {
        (edge as usize) >= self.num_space_edges
    }
}
