//! Incremental graphlet orbit-count deltas for a single edge toggle on an
//! undirected simple graph.
//!
//! The entry point is [`GraphletNetwork`]: construct one over a fixed
//! node universe, optionally seeded with edges, then drive it with
//! [`GraphletNetwork::flip`] and [`GraphletNetwork::calculate_delta`] to
//! maintain a running [`OrbitMatrix`] without a full recount on every
//! mutation. [`GraphletNetwork::calculate_orbit_counts`] recomputes that
//! matrix from scratch, for seeding and cross-checking.

mod adjacency;
mod counter;
mod delta;
mod error;
mod facade;
mod orbit;
mod orbit_matrix;

pub use counter::{BruteForceOrbitCounter, ExactOrbitCounter};
pub use delta::Delta;
pub use error::GraphError;
pub use facade::GraphletNetwork;
pub use orbit::{GRAPHLET_COUNT, ORBIT_COUNT};
pub use orbit_matrix::OrbitMatrix;
