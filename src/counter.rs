//! Exact (scratch) orbit counting, used to seed and cross-check the
//! incrementally-maintained matrix.
//!
//! A bulk graphlet counter is treated as an external collaborator here;
//! this module expresses that boundary as the [`ExactOrbitCounter`] trait
//! plus one naive-but-correct implementation, [`BruteForceOrbitCounter`],
//! so seeding and validation work out of the box without pulling in a
//! dedicated counting crate.

use crate::adjacency::AdjacencyStore;
use crate::orbit::{mask_pair_bit, ORBIT_TABLES};
use crate::orbit_matrix::OrbitMatrix;

/// Something that can compute the full N×73 orbit-count matrix of a
/// static graph from scratch.
pub trait ExactOrbitCounter {
    fn count(&self, g: &AdjacencyStore) -> OrbitMatrix;
}

/// Enumerates every `C(n,2)..C(n,5)` vertex subset directly via
/// [`ORBIT_TABLES`]. Correct, and adequate for seeding and cross-checking
/// the small/medium graphs this crate's tests exercise, but `O(n^5)` and
/// not meant to scale to production-sized networks.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceOrbitCounter;

impl ExactOrbitCounter for BruteForceOrbitCounter {
    fn count(&self, g: &AdjacencyStore) -> OrbitMatrix {
        let n = g.node_count();
        let mut out = OrbitMatrix::zeros(n);
        let nodes: Vec<u32> = (0..n as u32).collect();

        for k in 2..=5usize.min(n) {
            for combo in combinations(&nodes, k) {
                let mut mask: u16 = 0;
                for b in 1..k {
                    for a in 0..b {
                        if g.contains(combo[a], combo[b]) {
                            mask |= 1 << mask_pair_bit(a, b);
                        }
                    }
                }
                if ORBIT_TABLES.graphlet_id(k, mask).is_some() {
                    for (slot, &vertex) in combo.iter().enumerate() {
                        if let Some(orbit) = ORBIT_TABLES.orbit_of(k, mask, slot) {
                            out.credit(vertex as usize, orbit);
                        }
                    }
                }
            }
        }

        out
    }
}

fn combinations(pool: &[u32], k: usize) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn helper(pool: &[u32], start: usize, k: usize, current: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..pool.len() {
            current.push(pool[i]);
            helper(pool, i + 1, k, current, out);
            current.pop();
        }
    }
    helper(pool, 0, k, &mut current, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_graph_counts_to_all_zero() {
        let g = AdjacencyStore::new(4);
        let m = BruteForceOrbitCounter.count(&g);
        assert!((0..4).all(|i| (0..crate::orbit::ORBIT_COUNT).all(|o| m.get(i, o) == 0)));
    }

    #[test]
    fn single_edge_credits_orbit_zero_to_both_endpoints() {
        let mut g = AdjacencyStore::new(2);
        g.flip(0, 1);
        let m = BruteForceOrbitCounter.count(&g);
        assert_eq!(m.get(0, 0), 1);
        assert_eq!(m.get(1, 0), 1);
    }

    #[test]
    fn triangle_credits_three_nodes_identically() {
        let mut g = AdjacencyStore::new(3);
        g.flip(0, 1);
        g.flip(1, 2);
        g.flip(0, 2);
        let m = BruteForceOrbitCounter.count(&g);
        // same total graphlet incidence per node for a fully symmetric triangle
        let totals: Vec<u64> = (0..3)
            .map(|i| (0..crate::orbit::ORBIT_COUNT).map(|o| m.get(i, o)).sum())
            .collect();
        assert_eq!(totals[0], totals[1]);
        assert_eq!(totals[1], totals[2]);
    }

    #[test]
    fn isolated_vertex_has_all_zero_row() {
        let mut g = AdjacencyStore::new(3);
        g.flip(0, 1);
        let m = BruteForceOrbitCounter.count(&g);
        assert!((0..crate::orbit::ORBIT_COUNT).all(|o| m.get(2, o) == 0));
    }
}
