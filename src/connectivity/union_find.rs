//! Union-find (disjoint-set) connectivity.
//!
//! Answers a connectivity query by partitioning the whole node set into
//! components in one pass over the adjacency, then comparing the two
//! endpoints' set representatives. The forest is rebuilt for every query;
//! nothing persists between calls.
//!
//! Node identifiers are free to be sparse: a dense index is assigned to
//! each id (in ascending id order) before the pass, and the parent vector
//! is indexed by that dense position only.

use std::collections::HashMap;

use super::ensure_node;
use crate::error::Result;
use crate::graph::{NodeId, ProximityGraph};

/// A disjoint-set forest over dense indices.
///
/// Parents start as `None`, the sentinel for "is its own root"; `find`
/// applies full path compression. Unions are direction-arbitrary (the root
/// of `x` is attached beneath the root of `y`, no rank or size heuristic),
/// which is acceptable at this scale since compression flattens chains on
/// the next lookup.
pub struct UnionFind {
    parent: Vec<Option<usize>>,
}

impl UnionFind {
    /// Create a forest of `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
        }
    }

    /// Find the representative of the set containing `element`.
    ///
    /// Every element visited on the way up is reparented directly to the
    /// root, so repeated lookups approach constant time.
    pub fn find(&mut self, element: usize) -> usize {
        let mut root = element;
        while let Some(next) = self.parent[root] {
            root = next;
        }

        let mut cursor = element;
        while let Some(next) = self.parent[cursor] {
            self.parent[cursor] = Some(root);
            cursor = next;
        }

        root
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// A no-op when both already share a root.
    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x != root_y {
            self.parent[root_x] = Some(root_y);
        }
    }

    /// Whether `x` and `y` currently share a representative.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }
}

/// Check reachability by comparing union-find component representatives.
///
/// Builds the full disjoint-set forest over every node, unioning each node
/// with each of its neighbors. Every undirected edge is visited from both
/// endpoints; the second union finds matching roots and does nothing.
pub fn connected_component(graph: &ProximityGraph, a: NodeId, b: NodeId) -> Result<bool> {
    ensure_node(graph, a)?;
    ensure_node(graph, b)?;

    // Dense position per id, assigned in ascending id order. Built fresh
    // for this query so the graph itself carries no dense-id requirement.
    let ids = graph.node_ids();
    let dense: HashMap<NodeId, usize> = ids
        .iter()
        .copied()
        .enumerate()
        .map(|(position, id)| (id, position))
        .collect();

    let mut forest = UnionFind::new(ids.len());
    for (position, &id) in ids.iter().enumerate() {
        for neighbor in graph.neighbors(id)? {
            let neighbor_position = dense[&neighbor];
            if forest.find(position) != forest.find(neighbor_position) {
                forest.union(position, neighbor_position);
            }
        }
    }

    Ok(forest.connected(dense[&a], dense[&b]))
}
