//! The public entry point: 1-based external ids, validated arguments,
//! owns the graph.

use tracing::{debug, instrument};

use crate::adjacency::AdjacencyStore;
use crate::counter::{BruteForceOrbitCounter, ExactOrbitCounter};
use crate::delta::{compute_delta, Delta};
use crate::error::GraphError;
use crate::orbit_matrix::OrbitMatrix;

/// An undirected simple graph over a fixed, externally 1-based node
/// universe, with incremental and from-scratch orbit-count operations.
#[derive(Debug, Clone)]
pub struct GraphletNetwork {
    adj: AdjacencyStore,
}

impl GraphletNetwork {
    /// Builds an empty graph over `n` nodes, externally numbered `1..=n`.
    #[instrument(level = "debug")]
    pub fn construct(n: u32) -> Result<Self, GraphError> {
        if n < 1 {
            return Err(GraphError::InvalidNodeCount { n: n as i64 });
        }
        debug!(n, "constructed empty graph");
        Ok(Self {
            adj: AdjacencyStore::new(n as usize),
        })
    }

    /// Builds a graph over `n` nodes and loads `edges` (1-based pairs).
    #[instrument(level = "debug", skip(edges))]
    pub fn construct_with_edges(n: u32, edges: &[(u32, u32)]) -> Result<Self, GraphError> {
        let mut net = Self::construct(n)?;
        net.set_network(edges)?;
        Ok(net)
    }

    /// Builds a graph sized to the largest id appearing in `edges`.
    pub fn construct_from_edges(edges: &[(u32, u32)]) -> Result<Self, GraphError> {
        let n = edges
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .max()
            .ok_or_else(|| GraphError::InvalidInput {
                reason: "edge list is empty, node count cannot be inferred".to_string(),
            })?;
        Self::construct_with_edges(n, edges)
    }

    /// Node count `N`.
    pub fn node_count(&self) -> u32 {
        self.adj.node_count() as u32
    }

    fn to_index(&self, id: u32) -> Result<u32, GraphError> {
        let n = self.node_count();
        if id < 1 || id > n {
            return Err(GraphError::InvalidNodeId { id, n });
        }
        Ok(id - 1)
    }

    /// Empties the graph, keeping its node count.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.adj.reset();
        debug!("network reset");
    }

    /// Validates and applies `edges` after a [`reset`](Self::reset). On
    /// any validation failure the network is left reset, never in the
    /// pre-call state.
    #[instrument(level = "debug", skip(self, edges))]
    pub fn set_network(&mut self, edges: &[(u32, u32)]) -> Result<(), GraphError> {
        self.adj.reset();
        let n = self.node_count();
        let mut seen = std::collections::HashSet::new();
        for &(a, b) in edges {
            if a < 1 || a > n || b < 1 || b > n {
                self.adj.reset();
                return Err(GraphError::InvalidInput {
                    reason: format!("edge ({a},{b}) out of range for N={n}"),
                });
            }
            if a == b {
                self.adj.reset();
                return Err(GraphError::InvalidInput {
                    reason: format!("self-loop at node {a} is not permitted"),
                });
            }
            let key = if a < b { (a, b) } else { (b, a) };
            if !seen.insert(key) {
                self.adj.reset();
                return Err(GraphError::InvalidInput {
                    reason: format!("duplicate edge ({a},{b})"),
                });
            }
            self.adj.flip(a - 1, b - 1);
        }
        debug!(edge_count = edges.len(), "network loaded");
        Ok(())
    }

    /// Toggles `{i,j}` (1-based). Fails without mutation on invalid ids.
    #[instrument(level = "debug", skip(self))]
    pub fn flip(&mut self, i: u32, j: u32) -> Result<(), GraphError> {
        if i == j {
            return Err(GraphError::SelfLoop { id: i });
        }
        let a = self.to_index(i)?;
        let b = self.to_index(j)?;
        self.adj.flip(a, b);
        debug!(i, j, "flipped edge");
        Ok(())
    }

    /// Whether `{i,j}` is currently an edge (1-based). `i == j` is always
    /// `false`, never an error: unlike `flip` and `calculate_delta`, this
    /// query has an unambiguous answer for a self-pair.
    pub fn contains(&self, i: u32, j: u32) -> Result<bool, GraphError> {
        if i == j {
            return Ok(false);
        }
        let a = self.to_index(i)?;
        let b = self.to_index(j)?;
        Ok(self.adj.contains(a, b))
    }

    /// Ascending 1-based neighbour ids of `i`.
    pub fn get_neighbours(&self, i: u32) -> Result<Vec<u32>, GraphError> {
        let a = self.to_index(i)?;
        Ok(self.adj.neighbours(a).map(|x| x + 1).collect())
    }

    /// Every edge as `(min, max)` 1-based pairs, lexicographically
    /// ordered.
    pub fn network_as_matrix(&self) -> Vec<(u32, u32)> {
        self.adj
            .edges()
            .map(|(a, b)| (a + 1, b + 1))
            .collect()
    }

    /// Runs the delta engine for toggling `{i,j}` against the *current*
    /// adjacency (treated as "before"); does not mutate the graph.
    #[instrument(level = "debug", skip(self))]
    pub fn calculate_delta(&self, i: u32, j: u32) -> Result<Delta, GraphError> {
        if i == j {
            return Err(GraphError::SelfLoop { id: i });
        }
        let a = self.to_index(i)?;
        let b = self.to_index(j)?;
        let delta = compute_delta(&self.adj, a, b);
        debug!(i, j, "computed delta");
        Ok(delta)
    }

    /// Full from-scratch orbit-count matrix via [`BruteForceOrbitCounter`].
    pub fn calculate_orbit_counts(&self) -> OrbitMatrix {
        self.calculate_orbit_counts_with(&BruteForceOrbitCounter)
    }

    /// Same as [`calculate_orbit_counts`](Self::calculate_orbit_counts)
    /// but against a caller-supplied counter, so a faster external
    /// implementation can be substituted without touching this facade.
    pub fn calculate_orbit_counts_with(&self, counter: &dyn ExactOrbitCounter) -> OrbitMatrix {
        counter.count(&self.adj)
    }
}
