//! Depth-first search connectivity checks.
//!
//! Two variants with an identical contract: `true` iff `target` is
//! reachable from `start` by following edges, `false` otherwise, and an
//! error if either endpoint was never added to the graph. A node is
//! trivially connected to itself. Each call owns its visited set; nothing
//! is cached between queries.
//!
//! The recursive variant descends one call frame per path step, so its
//! stack depth grows with the size of the connected component. For large
//! components prefer [`connected_iterative`], which keeps the work list on
//! the heap and produces the same answer for every input.

use std::collections::HashSet;

use super::ensure_node;
use crate::error::Result;
use crate::graph::{NodeId, ProximityGraph};

/// Check reachability with a recursive depth-first search.
///
/// Short-circuits as soon as any branch reaches `target`.
pub fn connected_recursive(
    graph: &ProximityGraph,
    start: NodeId,
    target: NodeId,
) -> Result<bool> {
    ensure_node(graph, start)?;
    ensure_node(graph, target)?;

    let mut visited = HashSet::new();
    dfs(graph, start, target, &mut visited)
}

fn dfs(
    graph: &ProximityGraph,
    current: NodeId,
    target: NodeId,
    visited: &mut HashSet<NodeId>,
) -> Result<bool> {
    if current == target {
        return Ok(true);
    }
    visited.insert(current);
    for neighbor in graph.neighbors(current)? {
        if !visited.contains(&neighbor) && dfs(graph, neighbor, target, visited)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check reachability with an iterative depth-first search.
///
/// Uses an explicit stack instead of recursion; nodes are marked visited
/// when pushed, so no node enters the stack twice.
pub fn connected_iterative(
    graph: &ProximityGraph,
    start: NodeId,
    target: NodeId,
) -> Result<bool> {
    ensure_node(graph, start)?;
    ensure_node(graph, target)?;

    let mut visited = HashSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(current) = stack.pop() {
        if current == target {
            return Ok(true);
        }
        for neighbor in graph.neighbors(current)? {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(false)
}
