//! Graph data structures and operations.
//!
//! This module provides the proximity graph store: nodes identified by
//! stable caller-assigned IDs with fixed 2D coordinates, and undirected
//! edges created between every pair of nodes strictly closer than the
//! distance threshold. Topology lives in petgraph's StableGraph; all
//! mutation is confined to node insertion and edge construction, so a
//! built graph can be shared read-only across queries.

mod edge;
mod engine;
mod node;

pub use edge::Edge;
pub use engine::ProximityGraph;
pub use node::{Node, NodeId};
