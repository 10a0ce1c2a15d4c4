//! Core decoder state for Union Find syndrome decoding.
//!
//! This module contains the per-session state structure that holds all data
//! mutated during a decode: Union Find parent pointers, cluster parities,
//! boundary queues, the spanning forest, and correction bits. The immutable
//! graph lives alongside it and is shared by every session.

use crate::arena::Arena;
use crate::decoder::graph::{DecodingGraph, NO_CHECK};
use crate::error::BuildError;

/// Sentinel for empty queue slots, absent vents, and absent parents.
pub const NIL: u32 = u32::MAX;

/// Mutable decoder state for one decode session.
///
/// All slices are allocated from an [`Arena`] and sized by the graph's
/// dimensions. The state is fully reinitialized by [`reset`](Self::reset) at
/// the start of every decode call, so a failed call never leaks into the
/// next one.
///
/// # Thread Safety
///
/// `DecodingState` is not thread-safe. For parallel decoding, create one
/// instance per thread with separate arenas.
#[derive(Debug)]
pub struct DecodingState<'a> {
    /// Immutable decoding graph shared by all sessions.
    pub graph: DecodingGraph<'a>,

    // Union Find
    /// Parent pointers. `parents[v] == v` means vertex v is a root.
    pub parents: &'a mut [u32],
    /// Cluster size per root (number of vertices). Meaningful at roots only.
    pub cluster_size: &'a mut [u32],
    /// Cluster syndrome parity per root (0 even, 1 odd). Meaningful at
    /// roots only. A cluster that absorbed a boundary is forced even.
    pub parity: &'a mut [u8],

    // Per-vertex syndrome residue
    /// Working syndrome bit per vertex, flipped as peeling walks the forest.
    pub syndrome: &'a mut [u8],
    /// Nonzero for vertices pinned by an absorbed boundary edge. Anchored
    /// vertices never enter the leaf queue.
    pub anchored: &'a mut [u8],

    // Boundary queues (intrusive lists over CSR incidence slots)
    /// Queue head slot per root, [`NIL`] when empty.
    pub queue_head: &'a mut [u32],
    /// Queue tail slot per root, [`NIL`] when empty.
    pub queue_tail: &'a mut [u32],
    /// Next-slot link per CSR incidence slot, [`NIL`] at list ends.
    pub queue_next: &'a mut [u32],
    /// First boundary edge absorbed by each root, [`NIL`] before absorption.
    pub vent: &'a mut [u32],

    // Edge bitsets
    /// Edges grown so far, one bit per edge.
    pub grown: &'a mut [u64],
    /// Edges in the spanning forest, one bit per edge.
    pub in_forest: &'a mut [u64],
    /// Correction output bits, one bit per edge.
    pub edge_corrections: &'a mut [u64],

    // Spanning forest
    /// Forest edges in insertion order.
    pub forest_edges: &'a mut [u32],
    /// Number of valid entries in `forest_edges`.
    pub forest_len: usize,
    /// Remaining forest degree per vertex, decremented during peeling.
    pub forest_degree: &'a mut [u32],

    // Work queues
    /// FIFO of candidate leaf vertices during peeling.
    pub leaf_queue: &'a mut [u32],
    /// Snapshot of odd roots taken at the start of each growth round.
    pub round_roots: &'a mut [u32],
}

impl<'a> DecodingState<'a> {
    /// Allocates a decoding state for `graph` from the arena.
    ///
    /// The returned state is already reset and ready for a decode call.
    /// Use [`required_buffer_size`](crate::arena::required_buffer_size) to
    /// size the arena buffer.
    pub fn new(arena: &mut Arena<'a>, graph: DecodingGraph<'a>) -> Result<Self, BuildError> {
        let num_vertices = graph.num_vertices;
        let num_slots = graph.vertex_edges.len();
        let num_edge_words = graph.num_edges.div_ceil(64);

        let parents = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let cluster_size = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let parity = arena.alloc_slice::<u8>(num_vertices).map_err(map_oom)?;
        let syndrome = arena.alloc_slice::<u8>(num_vertices).map_err(map_oom)?;
        let anchored = arena.alloc_slice::<u8>(num_vertices).map_err(map_oom)?;
        let queue_head = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let queue_tail = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let queue_next = arena.alloc_slice::<u32>(num_slots).map_err(map_oom)?;
        let vent = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let grown = arena.alloc_slice::<u64>(num_edge_words).map_err(map_oom)?;
        let in_forest = arena.alloc_slice::<u64>(num_edge_words).map_err(map_oom)?;
        let edge_corrections = arena.alloc_slice::<u64>(num_edge_words).map_err(map_oom)?;
        let forest_edges = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let forest_degree = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let leaf_queue = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;
        let round_roots = arena.alloc_slice::<u32>(num_vertices).map_err(map_oom)?;

        let mut state = Self {
            graph,
            parents,
            cluster_size,
            parity,
            syndrome,
            anchored,
            queue_head,
            queue_tail,
            queue_next,
            vent,
            grown,
            in_forest,
            edge_corrections,
            forest_edges,
            forest_len: 0,
            forest_degree,
            leaf_queue,
            round_roots,
        };
        state.reset();
        Ok(state)
    }

    /// Reinitializes every session array for a fresh decode.
    ///
    /// Each vertex becomes a singleton cluster whose boundary queue holds all
    /// of its incident edges, chained through the CSR slot indices in order.
    pub fn reset(&mut self) {
        let num_vertices = self.graph.num_vertices;

        for v in 0..num_vertices {
            self.parents[v] = v as u32;
            self.cluster_size[v] = 1;
            self.parity[v] = 0;
            self.syndrome[v] = 0;
            self.anchored[v] = 0;
            self.vent[v] = NIL;
            self.forest_degree[v] = 0;

            let start = self.graph.vertex_offsets[v] as usize;
            let end = self.graph.vertex_offsets[v + 1] as usize;
            if start == end {
                self.queue_head[v] = NIL;
                self.queue_tail[v] = NIL;
            } else {
                self.queue_head[v] = start as u32;
                self.queue_tail[v] = (end - 1) as u32;
                for slot in start..end - 1 {
                    self.queue_next[slot] = (slot + 1) as u32;
                }
                self.queue_next[end - 1] = NIL;
            }
        }

        for word in self.grown.iter_mut() {
            *word = 0;
        }
        for word in self.in_forest.iter_mut() {
            *word = 0;
        }
        for word in self.edge_corrections.iter_mut() {
            *word = 0;
        }
        self.forest_len = 0;
    }

    // =========================================================================
    // Edge Bitset Helpers
    // =========================================================================

    /// Marks `edge` as grown.
    #[inline]
    pub fn mark_grown(&mut self, edge: u32) {
        self.grown[(edge / 64) as usize] |= 1u64 << (edge % 64);
    }

    /// Returns `true` if `edge` has been grown.
    #[inline]
    #[must_use]
    pub fn is_grown(&self, edge: u32) -> bool {
        self.grown[(edge / 64) as usize] >> (edge % 64) & 1 != 0
    }

    /// Adds `edge` to the spanning forest and bumps both endpoint degrees.
    #[inline]
    pub fn add_forest_edge(&mut self, edge: u32) {
        self.in_forest[(edge / 64) as usize] |= 1u64 << (edge % 64);
        self.forest_edges[self.forest_len] = edge;
        self.forest_len += 1;
        let (a, b) = self.graph.endpoints(edge);
        self.forest_degree[a as usize] += 1;
        if b != NO_CHECK {
            self.forest_degree[b as usize] += 1;
        }
    }

    /// Removes `edge` from the spanning forest bitset.
    #[inline]
    pub fn clear_forest_edge(&mut self, edge: u32) {
        self.in_forest[(edge / 64) as usize] &= !(1u64 << (edge % 64));
    }

    /// Returns `true` if `edge` is currently in the spanning forest.
    #[inline]
    #[must_use]
    pub fn is_in_forest(&self, edge: u32) -> bool {
        self.in_forest[(edge / 64) as usize] >> (edge % 64) & 1 != 0
    }

    /// Sets the correction bit for `edge`.
    #[inline]
    pub fn set_correction(&mut self, edge: u32) {
        self.edge_corrections[(edge / 64) as usize] |= 1u64 << (edge % 64);
    }

    /// Returns the correction bit for `edge`.
    #[inline]
    #[must_use]
    pub fn correction_bit(&self, edge: u32) -> u8 {
        (self.edge_corrections[(edge / 64) as usize] >> (edge % 64) & 1) as u8
    }

    // =========================================================================
    // Boundary Queue Helpers
    // =========================================================================

    /// Pops the next queue slot of root `r`, returning the slot index or
    /// [`NIL`] if the queue is empty.
    #[inline]
    pub fn queue_pop(&mut self, r: u32) -> u32 {
        let head = self.queue_head[r as usize];
        if head != NIL {
            let next = self.queue_next[head as usize];
            self.queue_head[r as usize] = next;
            if next == NIL {
                self.queue_tail[r as usize] = NIL;
            }
        }
        head
    }

    /// Appends the queue of `other` onto the queue of `r` in O(1).
    #[inline]
    pub fn queue_splice(&mut self, r: u32, other: u32) {
        let other_head = self.queue_head[other as usize];
        if other_head == NIL {
            return;
        }
        let tail = self.queue_tail[r as usize];
        if tail == NIL {
            self.queue_head[r as usize] = other_head;
        } else {
            self.queue_next[tail as usize] = other_head;
        }
        self.queue_tail[r as usize] = self.queue_tail[other as usize];
        self.queue_head[other as usize] = NIL;
        self.queue_tail[other as usize] = NIL;
    }
}

#[inline]
fn map_oom(_: &'static str) -> BuildError {
    BuildError::ArenaTooSmall
}
