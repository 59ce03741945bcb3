//! Connectivity engine.
//!
//! Three interchangeable algorithms answer the same question — do two
//! nodes lie in the same connected component? — over a built
//! [`ProximityGraph`]: recursive DFS, iterative DFS with an explicit
//! stack, and a union-find component comparison. All three operate
//! read-only, rebuild their transient state per query, and produce
//! identical true/false results for every input; they differ only in
//! traversal strategy and cost profile.

mod dfs;
mod union_find;

pub use dfs::{connected_iterative, connected_recursive};
pub use union_find::{UnionFind, connected_component};

use std::fmt;
use std::str::FromStr;

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, ProximityGraph};

/// Selector for the connectivity algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Recursive depth-first search.
    Recursive,
    /// Iterative depth-first search with an explicit stack.
    Iterative,
    /// Union-find component comparison.
    UnionFind,
}

impl Algorithm {
    /// The canonical selector name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Recursive => "dfs-recursive",
            Algorithm::Iterative => "dfs-iterative",
            Algorithm::UnionFind => "union-find",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    /// Parse a selector name. Underscore spellings are accepted alongside
    /// the canonical hyphenated ones.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dfs-recursive" | "dfs_recursive" => Ok(Algorithm::Recursive),
            "dfs-iterative" | "dfs_iterative" => Ok(Algorithm::Iterative),
            "union-find" | "union_find" => Ok(Algorithm::UnionFind),
            other => Err(GraphError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// Check whether two nodes are connected, using the selected algorithm.
pub fn connected(
    graph: &ProximityGraph,
    algorithm: Algorithm,
    a: NodeId,
    b: NodeId,
) -> Result<bool> {
    match algorithm {
        Algorithm::Recursive => connected_recursive(graph, a, b),
        Algorithm::Iterative => connected_iterative(graph, a, b),
        Algorithm::UnionFind => connected_component(graph, a, b),
    }
}

/// Fail fast when a query names an identifier that was never added.
fn ensure_node(graph: &ProximityGraph, id: NodeId) -> Result<()> {
    if graph.contains_node(id) {
        Ok(())
    } else {
        Err(GraphError::UnknownNode(id))
    }
}
