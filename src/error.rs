//! Error types for graph construction and connectivity queries.
//!
//! All errors here are caller contract violations, not transient conditions:
//! nothing is retried and there is no recovery path, only propagation.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the graph store and the connectivity engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a node identifier that was never added.
    ///
    /// Raised eagerly instead of treating the query as "not connected", so
    /// a typo in an input pair cannot masquerade as a disconnected result.
    #[error("unknown node: {0}")]
    UnknownNode(NodeId),

    /// An algorithm selector did not match any known connectivity algorithm.
    #[error("unknown algorithm: {0:?} (expected dfs-recursive, dfs-iterative, or union-find)")]
    UnknownAlgorithm(String),
}
