//! Incremental orbit-count delta for one edge toggle.
//!
//! Given the adjacency *as it stood before* a flip of `{u,v}`, this module
//! enumerates every induced subgraph on 2..=5 vertices whose membership in
//! `{u,v}`'s graphlet neighbourhood means its induced edge set could
//! possibly differ between "before" and "after" the toggle, classifies
//! each occurrence (before and after) via [`crate::orbit::ORBIT_TABLES`],
//! and accumulates the difference into two [`OrbitMatrix`] instances.
//!
//! Candidate extra vertices are drawn from a multi-source breadth-first
//! search rooted at `{u,v}` out to depth 3: a graphlet on 5 vertices can
//! place up to three "free" vertices in a chain hanging off one endpoint
//! (`u - w - x - y` with `v` attached only to `u`), so anything shallower
//! would silently miss valid graphlets. Candidate subsets are then
//! enumerated directly as combinations of that pool rather than grown via
//! a single-root canonical ordering: `u` and `v` are always members of
//! every visited set regardless of their id relative to the free
//! vertices, so the classic ESU "extend only to ids greater than the
//! root" rule does not have a single root to anchor on here. Enumerating
//! combinations directly sacrifices the tightest possible asymptotic
//! bound in exchange for an enumeration that is trivially exactly-once:
//! every subset of the pool is generated precisely once, full stop.

use std::collections::BTreeSet;

use tracing::trace;

use crate::adjacency::AdjacencyStore;
use crate::orbit::{mask_pair_bit, ORBIT_TABLES};
use crate::orbit_matrix::OrbitMatrix;

/// The `(add, rem)` pair produced by one delta computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delta {
    pub add: OrbitMatrix,
    pub rem: OrbitMatrix,
}

/// Depth of the multi-source BFS used to bound the candidate pool. See
/// the module docs for why 2 is not enough.
const POOL_DEPTH: usize = 3;

/// Computes the delta for toggling `{u,v}` against `g`, which is read but
/// never mutated: `g` is the "before" state throughout.
pub fn compute_delta(g: &AdjacencyStore, u: u32, v: u32) -> Delta {
    let n = g.node_count();
    let mut add = OrbitMatrix::zeros(n);
    let mut rem = OrbitMatrix::zeros(n);

    let pool = extended_pool(g, u, v);
    trace!(pool_size = pool.len(), "delta engine candidate pool built");

    // k = 2: the pair itself.
    credit_subgraph(g, &[u, v], &mut add, &mut rem);

    // k = 3, 4, 5: every combination of 1, 2, 3 extra vertices from the pool.
    for combo_size in 1..=3usize {
        for combo in combinations(&pool, combo_size) {
            let mut verts = Vec::with_capacity(2 + combo_size);
            verts.push(u);
            verts.push(v);
            verts.extend_from_slice(&combo);
            credit_subgraph(g, &verts, &mut add, &mut rem);
        }
    }

    Delta { add, rem }
}

/// Vertices (excluding `u`,`v`) within `POOL_DEPTH` hops of `{u,v}` in `g`.
fn extended_pool(g: &AdjacencyStore, u: u32, v: u32) -> Vec<u32> {
    let mut visited: BTreeSet<u32> = BTreeSet::new();
    visited.insert(u);
    visited.insert(v);
    let mut frontier = vec![u, v];

    for _ in 0..POOL_DEPTH {
        let mut next = Vec::new();
        for &x in &frontier {
            for nb in g.neighbours(x) {
                if visited.insert(nb) {
                    next.push(nb);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    visited.remove(&u);
    visited.remove(&v);
    visited.into_iter().collect()
}

/// All size-`k` subsets of `pool`, each as an ascending `Vec<u32>`,
/// generated in ascending-index order so no subset repeats.
fn combinations(pool: &[u32], k: usize) -> Vec<Vec<u32>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    combinations_helper(pool, 0, k, &mut current, &mut out);
    out
}

fn combinations_helper(
    pool: &[u32],
    start: usize,
    k: usize,
    current: &mut Vec<u32>,
    out: &mut Vec<Vec<u32>>,
) {
    if current.len() == k {
        out.push(current.clone());
        return;
    }
    for i in start..pool.len() {
        current.push(pool[i]);
        combinations_helper(pool, i + 1, k, current, out);
        current.pop();
    }
}

/// Classifies `verts` (slots `0,1` always `u,v`) before and after toggling
/// the `(u,v)` bit, crediting `rem` from the before-classification and
/// `add` from the after-classification.
fn credit_subgraph(g: &AdjacencyStore, verts: &[u32], add: &mut OrbitMatrix, rem: &mut OrbitMatrix) {
    let k = verts.len();
    let mut mask_before: u16 = 0;
    for b in 1..k {
        for a in 0..b {
            if g.contains(verts[a], verts[b]) {
                mask_before |= 1 << mask_pair_bit(a, b);
            }
        }
    }
    let uv_bit = mask_pair_bit(0, 1);
    let mask_after = mask_before ^ (1 << uv_bit);

    if ORBIT_TABLES.graphlet_id(k, mask_before).is_some() {
        for (slot, &vertex) in verts.iter().enumerate() {
            if let Some(orbit) = ORBIT_TABLES.orbit_of(k, mask_before, slot) {
                rem.credit(vertex as usize, orbit);
            }
        }
    }
    if ORBIT_TABLES.graphlet_id(k, mask_after).is_some() {
        for (slot, &vertex) in verts.iter().enumerate() {
            if let Some(orbit) = ORBIT_TABLES.orbit_of(k, mask_after, slot) {
                add.credit(vertex as usize, orbit);
            }
        }
    }
}
