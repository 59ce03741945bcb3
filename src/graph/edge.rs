//! Edge type and related structures.
//!
//! Edges are unordered pairs of distinct nodes. They are derived from the
//! graph topology rather than stored separately, and are always reported in
//! canonical form: the smaller identifier first. This guarantees that an
//! undirected edge between A and B is never enumerated as both (A, B) and
//! (B, A).

use serde::Serialize;
use std::fmt;

use super::node::NodeId;

/// An undirected edge in canonical form.
///
/// Construct through [`Edge::new`], which orders the endpoints so the
/// smaller identifier comes first regardless of argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Edge(pub NodeId, pub NodeId);

impl Edge {
    /// Create a canonical edge between two distinct nodes.
    #[inline]
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b { Self(a, b) } else { Self(b, a) }
    }

    /// The endpoint with the smaller identifier.
    #[inline]
    pub fn first(self) -> NodeId {
        self.0
    }

    /// The endpoint with the larger identifier.
    #[inline]
    pub fn second(self) -> NodeId {
        self.1
    }

    /// Whether `id` is one of the two endpoints.
    #[inline]
    pub fn touches(self, id: NodeId) -> bool {
        self.0 == id || self.1 == id
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({}, {})", self.0.raw(), self.1.raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_canonical_order() {
        let e = Edge::new(NodeId::new(5), NodeId::new(2));
        assert_eq!(e.first(), NodeId::new(2));
        assert_eq!(e.second(), NodeId::new(5));
        assert_eq!(e, Edge::new(NodeId::new(2), NodeId::new(5)));
    }

    #[test]
    fn test_edge_display() {
        let e = Edge::new(NodeId::new(7), NodeId::new(3));
        assert_eq!(format!("{}", e), "Edge(3, 7)");
    }

    #[test]
    fn test_edge_touches() {
        let e = Edge::new(NodeId::new(1), NodeId::new(4));
        assert!(e.touches(NodeId::new(1)));
        assert!(e.touches(NodeId::new(4)));
        assert!(!e.touches(NodeId::new(2)));
    }

    #[test]
    fn test_edge_serializes_as_pair() {
        let e = Edge::new(NodeId::new(9), NodeId::new(3));
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, "[3,9]");
    }
}
