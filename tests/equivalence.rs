//! Cross-algorithm properties checked over fixed scenarios and randomized
//! point clouds: the three connectivity algorithms must agree on every
//! pair, connectivity is reflexive and symmetric, edges respect the strict
//! threshold, and edge enumeration is canonical.

use std::collections::HashSet;

use proptest::prelude::*;
use proximity_graph::{
    Algorithm, GraphError, NodeId, ProximityGraph, connected, connected_component,
    connected_iterative, connected_recursive,
};

const ALGORITHMS: [Algorithm; 3] =
    [Algorithm::Recursive, Algorithm::Iterative, Algorithm::UnionFind];

fn id(raw: u32) -> NodeId {
    NodeId::new(raw)
}

/// Threshold 6.0 over {0:(0,0), 1:(3,4), 2:(100,100)}: the 0-1 distance
/// is exactly 5.0, within 6.0; node 2 is isolated.
#[test]
fn triangle_scenario() {
    let graph = ProximityGraph::from_points(
        6.0,
        vec![(id(0), 0.0, 0.0), (id(1), 3.0, 4.0), (id(2), 100.0, 100.0)],
    );

    assert_eq!(graph.edges().len(), 1);
    assert_eq!(connected_recursive(&graph, id(0), id(1)), Ok(true));
    assert_eq!(connected_recursive(&graph, id(0), id(2)), Ok(false));
    assert_eq!(connected_component(&graph, id(1), id(2)), Ok(false));
}

/// Same points with threshold 5.0: the 0-1 pair sits exactly on the
/// boundary and must not connect.
#[test]
fn threshold_boundary_is_strict() {
    let graph = ProximityGraph::from_points(
        5.0,
        vec![(id(0), 0.0, 0.0), (id(1), 3.0, 4.0), (id(2), 100.0, 100.0)],
    );

    assert!(graph.edges().is_empty());
    for algorithm in ALGORITHMS {
        assert_eq!(connected(&graph, algorithm, id(0), id(1)), Ok(false));
    }
}

/// A 5-node graph split into components of sizes 3 and 2.
#[test]
fn two_component_scenario() {
    let graph = ProximityGraph::from_points(
        1.5,
        vec![
            (id(0), 0.0, 0.0),
            (id(1), 1.0, 0.0),
            (id(2), 2.0, 0.0),
            (id(3), 20.0, 0.0),
            (id(4), 21.0, 0.0),
        ],
    );

    let within = [(id(0), id(2)), (id(1), id(2)), (id(3), id(4))];
    let across = [(id(0), id(3)), (id(2), id(4)), (id(1), id(3))];

    for algorithm in ALGORITHMS {
        for &(a, b) in &within {
            assert_eq!(connected(&graph, algorithm, a, b), Ok(true), "{algorithm}: {a}-{b}");
        }
        for &(a, b) in &across {
            assert_eq!(connected(&graph, algorithm, a, b), Ok(false), "{algorithm}: {a}-{b}");
        }
    }
}

#[test]
fn adjacency_is_symmetric() {
    let graph = ProximityGraph::from_points(
        3.0,
        vec![
            (id(0), 0.0, 0.0),
            (id(1), 2.0, 0.0),
            (id(2), 2.0, 2.0),
            (id(3), 9.0, 9.0),
        ],
    );

    let adjacency = graph.adjacency();
    for (node, neighbors) in &adjacency {
        for neighbor in neighbors {
            assert!(
                adjacency[neighbor].contains(node),
                "edge {node}-{neighbor} missing its mirror"
            );
        }
    }
}

#[test]
fn repeated_add_edge_changes_nothing() {
    let mut graph = ProximityGraph::new(5.0);
    graph.add_node(id(0), 0.0, 0.0);
    graph.add_node(id(1), 1.0, 1.0);

    graph.add_edge(id(0), id(1)).unwrap();
    let before = graph.edges();
    let adjacency_before = graph.adjacency();

    graph.add_edge(id(0), id(1)).unwrap();
    graph.add_edge(id(1), id(0)).unwrap();

    assert_eq!(graph.edges(), before);
    assert_eq!(graph.adjacency(), adjacency_before);
}

#[test]
fn edges_are_canonical_and_unique() {
    let points: Vec<_> = (0..12).map(|i| (id(i), f64::from(i % 4), f64::from(i / 4))).collect();
    let graph = ProximityGraph::from_points(1.8, points);

    let mut seen = HashSet::new();
    for edge in graph.edges() {
        assert!(edge.first() < edge.second(), "{edge} not canonical");
        assert!(seen.insert(edge), "{edge} reported twice");
    }
}

#[test]
fn unknown_query_node_is_an_error_for_every_algorithm() {
    let graph = ProximityGraph::from_points(1.0, vec![(id(0), 0.0, 0.0)]);

    for algorithm in ALGORITHMS {
        assert_eq!(
            connected(&graph, algorithm, id(0), id(42)),
            Err(GraphError::UnknownNode(id(42))),
            "{algorithm}"
        );
    }
}

proptest! {
    /// All three algorithms agree on every pair of nodes, whatever the
    /// point cloud and threshold.
    #[test]
    fn algorithms_agree_on_random_clouds(
        points in prop::collection::vec((0u32..40, 0.0f64..100.0, 0.0f64..100.0), 1..20),
        threshold in 1.0f64..40.0,
    ) {
        let graph = ProximityGraph::from_points(
            threshold,
            points.into_iter().map(|(raw, x, y)| (id(raw), x, y)),
        );

        let ids = graph.node_ids();
        for &a in &ids {
            for &b in &ids {
                let recursive = connected_recursive(&graph, a, b).unwrap();
                let iterative = connected_iterative(&graph, a, b).unwrap();
                let component = connected_component(&graph, a, b).unwrap();
                prop_assert_eq!(recursive, iterative, "recursive vs iterative on {}-{}", a, b);
                prop_assert_eq!(recursive, component, "recursive vs union-find on {}-{}", a, b);
            }
        }
    }

    /// Connectivity is reflexive and symmetric under every algorithm.
    #[test]
    fn connectivity_is_reflexive_and_symmetric(
        points in prop::collection::vec((0u32..30, 0.0f64..50.0, 0.0f64..50.0), 1..15),
        threshold in 1.0f64..20.0,
    ) {
        let graph = ProximityGraph::from_points(
            threshold,
            points.into_iter().map(|(raw, x, y)| (id(raw), x, y)),
        );

        let ids = graph.node_ids();
        for algorithm in ALGORITHMS {
            for &a in &ids {
                prop_assert!(connected(&graph, algorithm, a, a).unwrap());
                for &b in &ids {
                    prop_assert_eq!(
                        connected(&graph, algorithm, a, b).unwrap(),
                        connected(&graph, algorithm, b, a).unwrap()
                    );
                }
            }
        }
    }

    /// An edge exists between two nodes iff their distance is strictly
    /// below the threshold.
    #[test]
    fn edges_match_the_distance_predicate(
        points in prop::collection::vec((0u32..30, 0.0f64..50.0, 0.0f64..50.0), 1..15),
        threshold in 1.0f64..20.0,
    ) {
        let graph = ProximityGraph::from_points(
            threshold,
            points.into_iter().map(|(raw, x, y)| (id(raw), x, y)),
        );

        let edges: HashSet<_> = graph.edges().into_iter().collect();
        let ids = graph.node_ids();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                let (ax, ay) = graph.position(a).unwrap();
                let (bx, by) = graph.position(b).unwrap();
                let distance = ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt();
                let has_edge = edges.contains(&proximity_graph::Edge::new(a, b));
                prop_assert_eq!(has_edge, distance < threshold, "{}-{}", a, b);
            }
        }
    }
}
