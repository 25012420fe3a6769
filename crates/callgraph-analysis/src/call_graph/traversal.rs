//! Transitive dependency queries over a built call graph.

use std::collections::VecDeque;

use callgraph_core::types::collections::FxHashSet;
use petgraph::stable_graph::NodeIndex;
use petgraph::Direction;

use super::types::{CallGraph, CallGraphNode};

/// Every node reachable from `node` along call edges, in BFS order.
///
/// `node` itself is included only if it lies on a cycle.
pub fn all_dependencies<'g>(graph: &'g CallGraph, node: &CallGraphNode) -> Vec<&'g CallGraphNode> {
    bfs(graph, node, Direction::Outgoing)
}

/// Every node from which `node` is reachable, in BFS order.
///
/// `node` itself is included only if it lies on a cycle.
pub fn all_dependents<'g>(graph: &'g CallGraph, node: &CallGraphNode) -> Vec<&'g CallGraphNode> {
    bfs(graph, node, Direction::Incoming)
}

fn bfs<'g>(graph: &'g CallGraph, node: &CallGraphNode, direction: Direction) -> Vec<&'g CallGraphNode> {
    let Some(start) = graph.get_node(node) else {
        return Vec::new();
    };

    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut queue = VecDeque::from([start]);
    let mut result = Vec::new();

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.graph.neighbors_directed(current, direction) {
            if visited.insert(neighbor) {
                result.push(&graph.graph[neighbor]);
                queue.push_back(neighbor);
            }
        }
    }

    result
}
