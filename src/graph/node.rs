//! Node type and related structures.
//!
//! Nodes are the vertices in the proximity graph. Each node has:
//! - A stable unique identifier assigned by the caller
//! - Position (x, y) in the plane, immutable after insertion
//!
//! Adjacency is not stored on the node itself; the engine derives neighbor
//! sets from the underlying topology.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable node identifier.
///
/// Assigned by the caller when the node is added and used as the external
/// key for every graph and connectivity operation. Identifiers do not need
/// to be contiguous. Wraps a u32 for efficient storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId from a raw u32.
    #[inline]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw u32 value.
    #[inline]
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl From<u32> for NodeId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<NodeId> for u32 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// A point in the plane with its stable identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// External identifier.
    pub id: NodeId,
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Node {
    /// Create a new node at the given position.
    #[inline]
    pub fn new(id: NodeId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Euclidean distance to another node.
    #[inline]
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
