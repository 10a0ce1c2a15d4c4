//! Union Find (Disjoint Set Forest) implementation for cluster tracking.
//!
//! This module provides the data structure that tracks which checks belong to
//! the same cluster during decoding. It uses several optimizations:
//!
//! - **Fast path for self-rooted vertices**: At typical error rates most
//!   vertices never leave their singleton cluster. A direct check avoids any
//!   traversal.
//! - **Full path compression**: After locating the root, every vertex on the
//!   visited path is repointed directly at it, so repeated queries on the
//!   same chain are O(1).
//! - **Union by size**: The larger cluster absorbs the smaller; ties go to
//!   the lower root index, so merge results are reproducible.
//!
//! Merging clusters also merges their decoding metadata: syndrome parity is
//! XORed, boundary queues are spliced in O(1), and an absorbed boundary edge
//! (vent) carries over to the surviving root.

use super::state::{DecodingState, NIL};

/// Disjoint set forest operations for tracking connected clusters.
///
/// Each check starts as its own cluster. As cluster growth proceeds,
/// clusters that touch through a grown edge are merged using `union`. The
/// `find` operation determines which cluster a vertex belongs to.
///
/// # Cluster Representation
///
/// Each cluster is identified by its root vertex. The root is the vertex
/// where `parents[root] == root`; all other vertices in the cluster form a
/// tree leading to it. Per-cluster metadata (size, parity, boundary queue,
/// vent) is meaningful only at the root.
pub trait UnionFind {
    /// Finds the root (cluster representative) of vertex `v`.
    ///
    /// Two vertices are in the same cluster if and only if they have the
    /// same root. Visited vertices are repointed directly at the root, so
    /// trees stay flat.
    fn find(&mut self, v: u32) -> u32;

    /// Merges two clusters given their distinct root vertices.
    ///
    /// The larger cluster survives; on equal sizes the lower root index
    /// survives. Sizes are added, parities XORed, boundary queues spliced,
    /// and a vent on either side carries over (which forces the merged
    /// parity even).
    ///
    /// # Arguments
    ///
    /// * `root_a` - Root of the first cluster.
    /// * `root_b` - Root of the second cluster. Must differ from `root_a`.
    ///
    /// # Returns
    ///
    /// The surviving root.
    fn union_roots(&mut self, root_a: u32, root_b: u32) -> u32;

    /// Merges the clusters containing vertices `u` and `v`.
    ///
    /// # Returns
    ///
    /// * `Some(root)` - The surviving root, if the clusters were different.
    /// * `None` - If `u` and `v` were already in the same cluster.
    fn union(&mut self, u: u32, v: u32) -> Option<u32>;
}

impl<'a> UnionFind for DecodingState<'a> {
    // Fast path: self-rooted vertices answer without traversal.
    #[inline]
    fn find(&mut self, v: u32) -> u32 {
        let p = self.parents[v as usize];
        if p == v {
            return v;
        }
        self.find_slow(v)
    }

    fn union_roots(&mut self, root_a: u32, root_b: u32) -> u32 {
        debug_assert_ne!(root_a, root_b);

        let size_a = self.cluster_size[root_a as usize];
        let size_b = self.cluster_size[root_b as usize];
        let (survivor, absorbed) = if size_a > size_b || (size_a == size_b && root_a < root_b) {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };

        self.parents[absorbed as usize] = survivor;
        self.cluster_size[survivor as usize] = size_a + size_b;
        self.parity[survivor as usize] ^= self.parity[absorbed as usize];
        self.queue_splice(survivor, absorbed);

        // A vent on either side keeps venting for the merged cluster.
        if self.vent[survivor as usize] == NIL {
            self.vent[survivor as usize] = self.vent[absorbed as usize];
        }
        if self.vent[survivor as usize] != NIL {
            self.parity[survivor as usize] = 0;
        }

        survivor
    }

    #[inline]
    fn union(&mut self, u: u32, v: u32) -> Option<u32> {
        let root_u = self.find(u);
        let root_v = self.find(v);
        if root_u == root_v {
            None
        } else {
            Some(self.union_roots(root_u, root_v))
        }
    }
}

impl<'a> DecodingState<'a> {
    // Cold path: walk to the root, then repoint the whole path at it.
    #[inline(never)]
    #[cold]
    fn find_slow(&mut self, v: u32) -> u32 {
        let mut root = v;
        loop {
            let p = self.parents[root as usize];
            if p == root {
                break;
            }
            root = p;
        }

        let mut cursor = v;
        while cursor != root {
            let next = self.parents[cursor as usize];
            self.parents[cursor as usize] = root;
            cursor = next;
        }

        root
    }
}
