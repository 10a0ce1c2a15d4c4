//! Cluster growth: odd clusters expand until every syndrome can be matched.
//!
//! Growth proceeds in rounds. At the start of a round the decoder snapshots
//! every odd-parity cluster root in ascending index order; each snapshotted
//! cluster then claims exactly one ungrown edge from its boundary queue.
//! A claimed edge either reaches another cluster (the two merge and the edge
//! joins the spanning forest), closes a cycle inside the same cluster (the
//! edge is discarded), or crosses an open boundary (the cluster records the
//! edge as its vent and turns even). Rounds repeat until no odd cluster
//! remains.
//!
//! Boundary queues are filtered lazily: an edge may sit in two queues at
//! once, so each pop re-checks the grown bit and discards stale entries
//! instead of scrubbing queues during merges.

use super::graph::NO_CHECK;
use super::state::{DecodingState, NIL};
use super::union_find::UnionFind;
use crate::error::DecodeError;

/// Growth phase operations for syndrome spreading.
///
/// Implemented on [`DecodingState`]; exposed as a trait so benchmarks and
/// tests can drive the phases individually.
pub trait ClusterGrowth {
    /// Loads a syndrome into the freshly reset state.
    ///
    /// Every nonzero entry marks its vertex as a defect and turns the
    /// corresponding singleton cluster odd. The slice length must equal the
    /// vertex count; the engine validates this before calling.
    fn load_syndromes(&mut self, syndrome: &[u8]);

    /// Runs one growth round over all currently odd clusters.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one odd cluster existed and was grown.
    /// * `Ok(false)` - No odd clusters remain; growth is complete.
    /// * `Err(DecodeError::UnresolvedSyndrome)` - An odd cluster exhausted
    ///   its boundary queue and can never reach even parity.
    fn grow_round(&mut self) -> Result<bool, DecodeError>;

    /// Runs growth rounds to completion.
    fn grow_clusters(&mut self) -> Result<(), DecodeError>;
}

impl<'a> ClusterGrowth for DecodingState<'a> {
    fn load_syndromes(&mut self, syndrome: &[u8]) {
        for (v, &bit) in syndrome.iter().enumerate() {
            let bit = (bit != 0) as u8;
            self.syndrome[v] = bit;
            // Every vertex is still its own root right after reset.
            self.parity[v] = bit;
        }
    }

    fn grow_round(&mut self) -> Result<bool, DecodeError> {
        // Snapshot the odd roots in ascending order. Clusters formed or
        // turned odd by merges within this round wait for the next one.
        let mut count = 0;
        for v in 0..self.graph.num_vertices {
            if self.parents[v] == v as u32 && self.parity[v] == 1 {
                self.round_roots[count] = v as u32;
                count += 1;
            }
        }
        if count == 0 {
            return Ok(false);
        }

        for i in 0..count {
            let r = self.round_roots[i];
            // A snapshotted root may have been absorbed or neutralized by an
            // earlier merge in this same round.
            if self.parents[r as usize] != r || self.parity[r as usize] == 0 {
                continue;
            }

            let edge = self.pop_ungrown_edge(r)?;
            self.mark_grown(edge);

            let (a, b) = self.graph.endpoints(edge);
            if b == NO_CHECK {
                // Boundary absorption: the cluster can vent any residual
                // defect through this edge, so it stops being odd.
                if self.vent[r as usize] == NIL {
                    self.vent[r as usize] = edge;
                }
                self.parity[r as usize] = 0;
                continue;
            }

            let root_a = self.find(a);
            let root_b = self.find(b);
            if root_a == root_b {
                // Cycle edge inside one cluster. Claiming it still counts as
                // this round's growth step.
                continue;
            }
            self.union_roots(root_a, root_b);
            self.add_forest_edge(edge);
        }

        Ok(true)
    }

    fn grow_clusters(&mut self) -> Result<(), DecodeError> {
        while self.grow_round()? {}
        Ok(())
    }
}

impl<'a> DecodingState<'a> {
    /// Pops queue slots for root `r` until one refers to an ungrown edge.
    ///
    /// Queue exhaustion means the cluster spans a whole connected component
    /// and still carries odd parity, which no correction can fix.
    fn pop_ungrown_edge(&mut self, r: u32) -> Result<u32, DecodeError> {
        loop {
            let slot = self.queue_pop(r);
            if slot == NIL {
                return Err(DecodeError::UnresolvedSyndrome { check: r });
            }
            let edge = self.graph.vertex_edges[slot as usize];
            if !self.is_grown(edge) {
                return Ok(edge);
            }
        }
    }
}
