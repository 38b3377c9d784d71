//! Mutable undirected adjacency representation.
//!
//! `AdjacencyStore` is the 0-based, unchecked core behind [`crate::GraphletNetwork`].
//! Argument validation (id ranges, self-loops) is the facade's job; this
//! type trusts its caller so the hot paths (`contains`, `flip`, neighbour
//! iteration) stay allocation-free.

use std::collections::BTreeSet;

/// A fixed-size undirected simple graph over node ids `0..n`.
///
/// Each node's neighbours are kept in a `BTreeSet`, which gives ascending
/// iteration for free and O(log deg) membership/insertion/removal.
#[derive(Debug, Clone)]
pub struct AdjacencyStore {
    adj: Vec<BTreeSet<u32>>,
}

impl AdjacencyStore {
    /// Creates an empty graph over `n` nodes, `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            adj: vec![BTreeSet::new(); n],
        }
    }

    /// Number of nodes in the fixed universe.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Whether `{i,j}` is currently an edge. `i == j` is always `false`.
    pub fn contains(&self, i: u32, j: u32) -> bool {
        if i == j {
            return false;
        }
        self.adj[i as usize].contains(&j)
    }

    /// Ascending neighbour ids of `i`. Returns an iterator, not a handle
    /// into the underlying set, so callers cannot mutate through it.
    pub fn neighbours(&self, i: u32) -> impl Iterator<Item = u32> + '_ {
        self.adj[i as usize].iter().copied()
    }

    /// `|adj[i]|`.
    pub fn degree(&self, i: u32) -> usize {
        self.adj[i as usize].len()
    }

    /// Toggles `{i,j}`: inserts it symmetrically if absent, removes it
    /// symmetrically if present. Caller guarantees `i != j` and both ids
    /// are in range.
    pub fn flip(&mut self, i: u32, j: u32) {
        debug_assert!(i != j, "flip called with i == j");
        if self.adj[i as usize].remove(&j) {
            self.adj[j as usize].remove(&i);
        } else {
            self.adj[i as usize].insert(j);
            self.adj[j as usize].insert(i);
        }
    }

    /// Empties every adjacency set, keeping the node universe.
    pub fn reset(&mut self) {
        for neighbours in &mut self.adj {
            neighbours.clear();
        }
    }

    /// All edges, each emitted once as `(min, max)`, in ascending
    /// `(min, max)` order (since both the outer scan and each inner
    /// `BTreeSet` iterate ascending).
    pub fn edges(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.adj.iter().enumerate().flat_map(|(i, neighbours)| {
            let i = i as u32;
            neighbours
                .iter()
                .copied()
                .filter(move |&j| j > i)
                .map(move |j| (i, j))
        })
    }

    /// Total edge count, derived rather than tracked separately.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_is_empty() {
        let g = AdjacencyStore::new(4);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 0);
        assert!(g.edges().next().is_none());
    }

    #[test]
    fn flip_toggles_symmetrically() {
        let mut g = AdjacencyStore::new(3);
        assert!(!g.contains(0, 1));
        g.flip(0, 1);
        assert!(g.contains(0, 1));
        assert!(g.contains(1, 0));
        assert_eq!(g.degree(0), 1);
        assert_eq!(g.degree(1), 1);
        g.flip(1, 0);
        assert!(!g.contains(0, 1));
        assert_eq!(g.degree(0), 0);
    }

    #[test]
    fn self_pair_never_contained() {
        let g = AdjacencyStore::new(3);
        assert!(!g.contains(1, 1));
    }

    #[test]
    fn neighbours_ascend() {
        let mut g = AdjacencyStore::new(5);
        g.flip(2, 4);
        g.flip(2, 0);
        g.flip(2, 3);
        assert_eq!(g.neighbours(2).collect::<Vec<_>>(), vec![0, 3, 4]);
    }

    #[test]
    fn edges_emit_min_max_once() {
        let mut g = AdjacencyStore::new(4);
        g.flip(3, 1);
        g.flip(0, 2);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 2), (1, 3)]);
    }

    #[test]
    fn reset_clears_all_adjacency() {
        let mut g = AdjacencyStore::new(3);
        g.flip(0, 1);
        g.flip(1, 2);
        g.reset();
        assert_eq!(g.edge_count(), 0);
        assert!(g.neighbours(1).next().is_none());
    }
}
