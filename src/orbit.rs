//! Table-driven classification of small induced subgraphs into graphlets
//! and orbits.
//!
//! Every connected induced subgraph on `k ∈ {2,3,4,5}` labelled vertices
//! is encoded as a bitmask over its `k·(k-1)/2` possible vertex pairs.
//! The tables below are derived once, lazily, by brute-force isomorphism
//! and automorphism search over those masks (see [`OrbitTables::build`]);
//! nothing here is transcribed from a published numbering. The resulting
//! cardinalities (30 graphlets, 73 orbits) are asserted at construction
//! time rather than assumed.

use once_cell::sync::Lazy;

/// Total number of automorphism orbits across all connected graphlets on
/// 2..=5 vertices.
pub const ORBIT_COUNT: usize = 73;

/// Total number of connected graphlets on 2..=5 vertices.
pub const GRAPHLET_COUNT: usize = 30;

const MAX_K: usize = 5;

/// Bit position of the pair `(a,b)` (unordered) within a `k`-vertex mask.
/// Independent of `k`: pairs are ordered `(0,1),(0,2),(1,2),(0,3),...`.
fn pair_bit(a: usize, b: usize) -> usize {
    let (a, b) = if a < b { (a, b) } else { (b, a) };
    b * (b - 1) / 2 + a
}

fn bits_for(k: usize) -> usize {
    k * (k - 1) / 2
}

/// Relabels `mask` (a `k`-vertex graph) under `perm`, where vertex `x`
/// becomes vertex `perm[x]`.
fn apply_perm(k: usize, mask: u16, perm: &[usize]) -> u16 {
    let mut out = 0u16;
    for b in 1..k {
        for a in 0..b {
            if mask & (1 << pair_bit(a, b)) != 0 {
                out |= 1 << pair_bit(perm[a], perm[b]);
            }
        }
    }
    out
}

fn permutations(k: usize) -> Vec<Vec<usize>> {
    fn helper(k: usize, current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for v in 0..k {
            if !used[v] {
                used[v] = true;
                current.push(v);
                helper(k, current, used, out);
                current.pop();
                used[v] = false;
            }
        }
    }
    let mut out = Vec::new();
    helper(k, &mut Vec::new(), &mut vec![false; k], &mut out);
    out
}

fn find_root(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

fn is_connected(k: usize, mask: u16) -> bool {
    let mut parent: Vec<usize> = (0..k).collect();
    for b in 1..k {
        for a in 0..b {
            if mask & (1 << pair_bit(a, b)) != 0 {
                let ra = find_root(&mut parent, a);
                let rb = find_root(&mut parent, b);
                if ra != rb {
                    parent[ra] = rb;
                }
            }
        }
    }
    let root = find_root(&mut parent, 0);
    (1..k).all(|v| find_root(&mut parent, v) == root)
}

/// Classification of one connected mask: which graphlet it belongs to,
/// and which global orbit each of its (up to 5) vertex slots occupies.
#[derive(Debug, Clone, Copy)]
struct GraphletClass {
    graphlet_id: u16,
    orbit_of_vertex: [u16; MAX_K],
}

/// Lazily-built, process-wide, read-only classification tables.
pub struct OrbitTables {
    // indexed by k - 2, then by mask
    classify: [Vec<Option<GraphletClass>>; 4],
}

impl OrbitTables {
    fn build() -> Self {
        let mut classify: [Vec<Option<GraphletClass>>; 4] =
            [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        let mut next_graphlet_id: u16 = 0;
        let mut next_orbit_id: u16 = 0;

        for k in 2..=5usize {
            let bits = bits_for(k);
            let num_masks = 1usize << bits;
            let perms = permutations(k);

            // canonical[mask] = (smallest mask in its isomorphism class, a
            // permutation witnessing mask -> canonical), only for connected masks.
            let mut canonical: Vec<Option<(u16, Vec<usize>)>> = vec![None; num_masks];
            for mask in 0..num_masks {
                let mask = mask as u16;
                if !is_connected(k, mask) {
                    continue;
                }
                let mut best_val = u16::MAX;
                let mut best_idx = 0usize;
                for (idx, perm) in perms.iter().enumerate() {
                    let permuted = apply_perm(k, mask, perm);
                    if permuted < best_val {
                        best_val = permuted;
                        best_idx = idx;
                    }
                }
                canonical[mask as usize] = Some((best_val, perms[best_idx].clone()));
            }

            let mut canon_values: Vec<u16> = canonical
                .iter()
                .filter_map(|c| c.as_ref().map(|(v, _)| *v))
                .collect();
            canon_values.sort_unstable();
            canon_values.dedup();

            let mut slot: Vec<Option<GraphletClass>> = vec![None; num_masks];

            for &canon in &canon_values {
                // automorphism group of the canonical representative
                let autos: Vec<&Vec<usize>> = perms
                    .iter()
                    .filter(|p| apply_perm(k, canon, p) == canon)
                    .collect();

                let mut parent: Vec<usize> = (0..k).collect();
                for p in &autos {
                    for v in 0..k {
                        let ra = find_root(&mut parent, v);
                        let rb = find_root(&mut parent, p[v]);
                        if ra != rb {
                            parent[ra] = rb;
                        }
                    }
                }

                let mut root_to_orbit: std::collections::HashMap<usize, u16> =
                    std::collections::HashMap::new();
                let mut vertex_orbit = [0u16; MAX_K];
                for v in 0..k {
                    let root = find_root(&mut parent, v);
                    let orbit_id = *root_to_orbit.entry(root).or_insert_with(|| {
                        let id = next_orbit_id;
                        next_orbit_id += 1;
                        id
                    });
                    vertex_orbit[v] = orbit_id;
                }

                let graphlet_id = next_graphlet_id;
                next_graphlet_id += 1;

                for mask in 0..num_masks {
                    if let Some((c, perm)) = &canonical[mask] {
                        if *c == canon {
                            let mut orbit_of_vertex = [0u16; MAX_K];
                            for (v, slot_orbit) in orbit_of_vertex.iter_mut().enumerate().take(k) {
                                *slot_orbit = vertex_orbit[perm[v]];
                            }
                            slot[mask] = Some(GraphletClass {
                                graphlet_id,
                                orbit_of_vertex,
                            });
                        }
                    }
                }
            }

            classify[k - 2] = slot;
        }

        assert_eq!(
            next_graphlet_id as usize, GRAPHLET_COUNT,
            "graphlet table construction produced {} graphlets, expected {}",
            next_graphlet_id, GRAPHLET_COUNT
        );
        assert_eq!(
            next_orbit_id as usize, ORBIT_COUNT,
            "orbit table construction produced {} orbits, expected {}",
            next_orbit_id, ORBIT_COUNT
        );

        OrbitTables { classify }
    }

    /// Graphlet index `[0,30)` of the connected induced subgraph on `k`
    /// vertices encoded by `mask`, or `None` if `mask` is disconnected.
    pub fn graphlet_id(&self, k: usize, mask: u16) -> Option<u16> {
        self.classify[k - 2][mask as usize].map(|c| c.graphlet_id)
    }

    /// Orbit index `[0,73)` of vertex slot `vertex` (`0..k`) within the
    /// connected induced subgraph on `k` vertices encoded by `mask`.
    pub fn orbit_of(&self, k: usize, mask: u16, vertex: usize) -> Option<u16> {
        self.classify[k - 2][mask as usize].map(|c| c.orbit_of_vertex[vertex])
    }
}

/// Process-wide orbit/graphlet classification tables, built on first use.
pub static ORBIT_TABLES: Lazy<OrbitTables> = Lazy::new(OrbitTables::build);

/// Bit position of the unordered pair `(a,b)` within a mask, exposed for
/// the delta engine to build masks from adjacency queries.
pub fn mask_pair_bit(a: usize, b: usize) -> usize {
    pair_bit(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_match_spec() {
        // Forces construction; the asserts inside `build` already check
        // this, but fail loudly here too if that ever changes.
        assert_eq!(ORBIT_TABLES.classify.len(), 4);
    }

    #[test]
    fn single_edge_is_one_graphlet_one_orbit() {
        let mask = 1u16 << mask_pair_bit(0, 1);
        assert_eq!(ORBIT_TABLES.graphlet_id(2, mask), Some(0));
        assert_eq!(ORBIT_TABLES.orbit_of(2, mask, 0), Some(0));
        assert_eq!(ORBIT_TABLES.orbit_of(2, mask, 1), Some(0));
    }

    #[test]
    fn empty_two_vertex_mask_is_disconnected() {
        assert_eq!(ORBIT_TABLES.graphlet_id(2, 0), None);
    }

    #[test]
    fn triangle_has_single_symmetric_orbit() {
        let mask = (1 << mask_pair_bit(0, 1)) | (1 << mask_pair_bit(0, 2)) | (1 << mask_pair_bit(1, 2));
        let g = ORBIT_TABLES.graphlet_id(3, mask).unwrap();
        let o0 = ORBIT_TABLES.orbit_of(3, mask, 0).unwrap();
        let o1 = ORBIT_TABLES.orbit_of(3, mask, 1).unwrap();
        let o2 = ORBIT_TABLES.orbit_of(3, mask, 2).unwrap();
        assert_eq!(o0, o1);
        assert_eq!(o1, o2);
        // the triangle is a different graphlet from the 3-path
        let path_mask = (1 << mask_pair_bit(0, 1)) | (1 << mask_pair_bit(1, 2));
        assert_ne!(ORBIT_TABLES.graphlet_id(3, path_mask).unwrap(), g);
    }

    #[test]
    fn three_path_distinguishes_middle_from_ends() {
        let path_mask = (1 << mask_pair_bit(0, 1)) | (1 << mask_pair_bit(1, 2));
        let middle = ORBIT_TABLES.orbit_of(3, path_mask, 1).unwrap();
        let end_a = ORBIT_TABLES.orbit_of(3, path_mask, 0).unwrap();
        let end_b = ORBIT_TABLES.orbit_of(3, path_mask, 2).unwrap();
        assert_eq!(end_a, end_b);
        assert_ne!(middle, end_a);
    }

    #[test]
    fn four_cycle_is_fully_symmetric() {
        let mask = (1 << mask_pair_bit(0, 1))
            | (1 << mask_pair_bit(1, 2))
            | (1 << mask_pair_bit(2, 3))
            | (1 << mask_pair_bit(3, 0));
        let orbits: Vec<u16> = (0..4)
            .map(|v| ORBIT_TABLES.orbit_of(4, mask, v).unwrap())
            .collect();
        assert!(orbits.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn disconnected_five_vertex_mask_has_no_classification() {
        // two disjoint edges plus an isolated vertex among 5 slots
        let mask = (1 << mask_pair_bit(0, 1)) | (1 << mask_pair_bit(2, 3));
        assert_eq!(ORBIT_TABLES.graphlet_id(5, mask), None);
    }
}
