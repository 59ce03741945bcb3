//! ProximityGraph - Core graph data structure.
//!
//! The ProximityGraph stores the graph topology using petgraph's StableGraph
//! and maintains a mapping between caller-assigned stable identifiers and
//! internal indices. Edges are created only between nodes whose Euclidean
//! distance is strictly below the distance threshold fixed at construction.
//!
//! Construction is brute-force: every pair of nodes is compared against the
//! threshold. No spatial index is used.

use petgraph::Undirected;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::edge::Edge;
use super::node::{Node, NodeId};
use crate::error::{GraphError, Result};

/// The proximity graph engine.
///
/// This struct manages:
/// - Graph topology via petgraph (undirected, no parallel edges)
/// - Node coordinates, immutable after insertion
/// - ID mapping between stable caller-assigned IDs and internal indices
///
/// Lifecycle: construct with a threshold, add all nodes, add edges (either
/// pairwise through [`add_edge`](Self::add_edge) or in one pass through
/// [`build_edges`](Self::build_edges)), then query. There is no deletion
/// API; once queries begin the graph is treated as frozen and may be shared
/// by reference across any number of readers.
pub struct ProximityGraph {
    /// The underlying topology. Node weights carry id and coordinates.
    graph: StableGraph<Node, (), Undirected>,

    /// Map from stable NodeId to petgraph NodeIndex.
    node_id_to_index: HashMap<NodeId, NodeIndex>,

    /// Strict distance cutoff below which two nodes are adjacent.
    threshold: f64,
}

impl ProximityGraph {
    /// Create a new empty graph with the given distance threshold.
    ///
    /// The threshold is fixed for the lifetime of the graph.
    pub fn new(threshold: f64) -> Self {
        Self {
            graph: StableGraph::default(),
            node_id_to_index: HashMap::new(),
            threshold,
        }
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(threshold: f64, node_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            graph: StableGraph::with_capacity(node_capacity, edge_capacity),
            node_id_to_index: HashMap::with_capacity(node_capacity),
            threshold,
        }
    }

    /// Build a graph from a sequence of identified points.
    ///
    /// Adds every point as a node, then runs the full pairwise edge pass.
    /// Duplicate identifiers follow `add_node` semantics: the last
    /// occurrence wins.
    pub fn from_points<I>(threshold: f64, points: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, f64, f64)>,
    {
        let mut graph = Self::new(threshold);
        for (id, x, y) in points {
            graph.add_node(id, x, y);
        }
        graph.build_edges();
        graph
    }

    // =========================================================================
    // Node Operations
    // =========================================================================

    /// Add a node with the given identifier and position.
    ///
    /// The node starts with no neighbors. If a node with the same identifier
    /// already exists it is overwritten: its coordinates are replaced and
    /// all of its edges are dropped (last write wins).
    pub fn add_node(&mut self, id: NodeId, x: f64, y: f64) {
        if let Some(old) = self.node_id_to_index.remove(&id) {
            self.graph.remove_node(old);
        }
        let index = self.graph.add_node(Node::new(id, x, y));
        self.node_id_to_index.insert(id, index);
    }

    /// Get the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Check whether a node with this identifier exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_id_to_index.contains_key(&id)
    }

    /// Get a node's position, if it exists.
    pub fn position(&self, id: NodeId) -> Option<(f64, f64)> {
        self.node_id_to_index.get(&id).map(|&index| {
            let node = &self.graph[index];
            (node.x, node.y)
        })
    }

    /// All node identifiers, in ascending order.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.node_id_to_index.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// The distance threshold this graph was constructed with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    // =========================================================================
    // Edge Operations
    // =========================================================================

    /// Add an edge between two existing nodes if they are within range.
    ///
    /// Computes the Euclidean distance between the endpoints and inserts the
    /// undirected edge only when the distance is strictly below the
    /// threshold; a distance equal to the threshold does not connect.
    /// Re-adding a qualifying edge is a no-op, and an edge from a node to
    /// itself is never created.
    ///
    /// Returns whether the edge exists after the call, or
    /// [`GraphError::UnknownNode`] if either endpoint was never added.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<bool> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        if a == b {
            return Ok(false);
        }

        let (na, nb) = (self.graph[ia], self.graph[ib]);
        if na.distance_to(&nb) >= self.threshold {
            return Ok(false);
        }
        if self.graph.find_edge(ia, ib).is_none() {
            self.graph.add_edge(ia, ib, ());
        }
        Ok(true)
    }

    /// Run the brute-force pairwise edge pass over all current nodes.
    ///
    /// Every unordered pair of distinct nodes is compared against the
    /// threshold, so the pass is O(n²) in the node count. Pairs already
    /// connected are left untouched. Returns the number of edges added.
    pub fn build_edges(&mut self) -> usize {
        let indices: Vec<NodeIndex> = self.graph.node_indices().collect();
        let mut added = 0;

        for (i, &ia) in indices.iter().enumerate() {
            for &ib in &indices[i + 1..] {
                let (na, nb) = (self.graph[ia], self.graph[ib]);
                if na.distance_to(&nb) < self.threshold
                    && self.graph.find_edge(ia, ib).is_none()
                {
                    self.graph.add_edge(ia, ib, ());
                    added += 1;
                }
            }
        }

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            added,
            threshold = self.threshold,
            "built proximity edges"
        );
        added
    }

    /// Get the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get the neighbor identifiers of a node, in ascending order.
    ///
    /// Returns [`GraphError::UnknownNode`] if the node does not exist; an
    /// isolated node yields an empty list.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let index = self.index_of(id)?;
        let mut ids: Vec<NodeId> = self
            .graph
            .neighbors(index)
            .map(|n| self.graph[n].id)
            .collect();
        ids.sort_unstable();
        Ok(ids)
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// All edges, each reported exactly once in canonical form.
    ///
    /// Sorted ascending by first endpoint, then second, so the enumeration
    /// is reproducible.
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .graph
            .edge_references()
            .map(|e| Edge::new(self.graph[e.source()].id, self.graph[e.target()].id))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Adjacency view: every node mapped to its sorted neighbor list.
    ///
    /// Isolated nodes are present with an empty list.
    pub fn adjacency(&self) -> BTreeMap<NodeId, Vec<NodeId>> {
        let mut adjacency = BTreeMap::new();
        for index in self.graph.node_indices() {
            let mut ids: Vec<NodeId> = self
                .graph
                .neighbors(index)
                .map(|n| self.graph[n].id)
                .collect();
            ids.sort_unstable();
            adjacency.insert(self.graph[index].id, ids);
        }
        adjacency
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn index_of(&self, id: NodeId) -> Result<NodeIndex> {
        self.node_id_to_index
            .get(&id)
            .copied()
            .ok_or(GraphError::UnknownNode(id))
    }
}
