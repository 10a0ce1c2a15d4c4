//! Peeling: turning the spanning forest into explicit correction bits.
//!
//! After growth, every defect lies in an even cluster or in a cluster that
//! absorbed a boundary edge. The spanning forest built during growth connects
//! each cluster's vertices, and peeling walks it leaf by leaf: a leaf
//! carrying a defect flips the forest edge into the correction and moves the
//! defect to its neighbor; a clean leaf just drops off. Each step removes one
//! edge, so the walk is linear in forest size.
//!
//! Clusters that absorbed a boundary edge are handled by anchoring: the
//! in-graph endpoint of the recorded vent edge never enters the leaf queue,
//! so peeling drains the cluster's residual defect onto it. A final pass
//! discharges that residue through the vent edge itself.

use super::graph::NO_CHECK;
use super::state::{DecodingState, NIL};

/// Peeling phase operations for correction extraction.
///
/// Implemented on [`DecodingState`]; exposed as a trait so benchmarks and
/// tests can drive the phases individually.
pub trait Peeling {
    /// Peels the spanning forest, accumulating correction bits per edge.
    ///
    /// Must run after growth has completed. Correction bits are read back
    /// through [`DecodingState::correction_bit`].
    fn peel_forest(&mut self);
}

impl<'a> Peeling for DecodingState<'a> {
    fn peel_forest(&mut self) {
        self.mark_anchors();

        // Seed the FIFO with every current non-anchored leaf. Later degree
        // drops push new leaves; each vertex is pushed at most once because
        // degrees only decrease.
        let mut head = 0;
        let mut tail = 0;
        for v in 0..self.graph.num_vertices {
            if self.forest_degree[v] == 1 && self.anchored[v] == 0 {
                self.leaf_queue[tail] = v as u32;
                tail += 1;
            }
        }

        while head < tail {
            let v = self.leaf_queue[head];
            head += 1;
            // A queued leaf can lose its last edge to a neighbor peeled
            // earlier; skip the stale entry.
            if self.forest_degree[v as usize] != 1 {
                continue;
            }

            let Some(edge) = self.remaining_forest_edge(v) else {
                continue;
            };
            let u = self.graph.other_endpoint(edge, v);

            if self.syndrome[v as usize] == 1 {
                self.set_correction(edge);
                self.syndrome[v as usize] = 0;
                self.syndrome[u as usize] ^= 1;
            }

            self.clear_forest_edge(edge);
            self.forest_degree[v as usize] -= 1;
            self.forest_degree[u as usize] -= 1;
            if self.forest_degree[u as usize] == 1 && self.anchored[u as usize] == 0 {
                self.leaf_queue[tail] = u;
                tail += 1;
            }
        }

        self.discharge_vents();
    }
}

impl<'a> DecodingState<'a> {
    /// Marks the in-graph endpoint of every surviving vent edge as anchored.
    fn mark_anchors(&mut self) {
        for v in 0..self.graph.num_vertices {
            if self.parents[v] == v as u32 && self.vent[v] != NIL {
                let edge = self.vent[v];
                let (a, b) = self.graph.endpoints(edge);
                debug_assert_eq!(b, NO_CHECK);
                self.anchored[a as usize] = 1;
            }
        }
    }

    /// Flips each vent edge whose anchor still holds a defect after peeling.
    fn discharge_vents(&mut self) {
        for v in 0..self.graph.num_vertices {
            if self.parents[v] == v as u32 && self.vent[v] != NIL {
                let edge = self.vent[v];
                let a = self.graph.edge_checks[2 * edge as usize];
                if self.syndrome[a as usize] == 1 {
                    self.set_correction(edge);
                    self.syndrome[a as usize] = 0;
                }
            }
        }
    }

    /// Returns the single forest edge still incident to leaf `v`, if any.
    fn remaining_forest_edge(&self, v: u32) -> Option<u32> {
        self.graph
            .incident_edges(v)
            .iter()
            .copied()
            .find(|&e| self.is_in_forest(e))
    }
}
