use thiserror::Error;

/// Everything that can go wrong at the boundary of this crate.
///
/// `TypeMismatch` from the language-neutral error taxonomy has no
/// counterpart here: Rust's type system already makes "a non-network
/// value passed where a network is expected" unrepresentable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node count must be at least 1, got {n}")]
    InvalidNodeCount { n: i64 },

    #[error("node id {id} is out of range for a graph of {n} nodes (valid range is 1..={n})")]
    InvalidNodeId { id: u32, n: u32 },

    #[error("self-loops are not supported, got node id {id} paired with itself")]
    SelfLoop { id: u32 },

    #[error("invalid edge list: {reason}")]
    InvalidInput { reason: String },
}
