//! Call graph node, edge and store types.

use std::fmt;

use callgraph_core::types::collections::FxHashMap;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::program::{QualifiedName, ResolvedType, SpecializationKind, TypeParameterResolutions};

/// A concrete invocable unit: callable, functor variant, generic instantiation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CallGraphNode {
    pub callable: QualifiedName,
    pub kind: SpecializationKind,
    /// `None` when the callable is referenced generically or has no type
    /// parameters. Distinct from `Some(vec![])`.
    pub type_arguments: Option<Vec<ResolvedType>>,
}

impl CallGraphNode {
    pub fn new(
        callable: QualifiedName,
        kind: SpecializationKind,
        type_arguments: Option<Vec<ResolvedType>>,
    ) -> Self {
        Self {
            callable,
            kind,
            type_arguments,
        }
    }

    /// The body variant of `callable` with unspecified type arguments.
    pub fn body(callable: QualifiedName) -> Self {
        Self::new(callable, SpecializationKind::Body, None)
    }
}

impl fmt::Display for CallGraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.callable)?;
        if let Some(args) = &self.type_arguments {
            f.write_str("[")?;
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str("]")?;
        }
        write!(f, " ({})", self.kind)
    }
}

/// A call dependency, weighted with the resolution active at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallEdge {
    pub resolutions: TypeParameterResolutions,
}

/// Borrowed view of one edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency<'g> {
    pub caller: &'g CallGraphNode,
    pub callee: &'g CallGraphNode,
    pub resolutions: &'g TypeParameterResolutions,
}

/// The call graph: directed edges between concrete specializations.
///
/// The same node pair may be connected by several edges as long as their
/// resolutions differ; identical triples are stored once.
pub struct CallGraph {
    /// The underlying petgraph StableGraph.
    pub graph: StableGraph<CallGraphNode, CallEdge, Directed>,
    /// Node identity to graph index.
    pub node_index: FxHashMap<CallGraphNode, NodeIndex>,
}

impl CallGraph {
    /// Create an empty call graph.
    pub fn new() -> Self {
        Self {
            graph: StableGraph::new(),
            node_index: FxHashMap::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn get_node(&self, node: &CallGraphNode) -> Option<NodeIndex> {
        self.node_index.get(node).copied()
    }

    pub fn contains_node(&self, node: &CallGraphNode) -> bool {
        self.node_index.contains_key(node)
    }

    /// Register a node, returning its index. Existing nodes are reused.
    pub fn add_node(&mut self, node: &CallGraphNode) -> NodeIndex {
        if let Some(&existing) = self.node_index.get(node) {
            return existing;
        }
        let idx = self.graph.add_node(node.clone());
        self.node_index.insert(node.clone(), idx);
        idx
    }

    /// Record `caller -> callee` under `resolutions`.
    ///
    /// Self-edges are allowed. Returns false if the identical triple was
    /// already present.
    pub fn add_dependency(
        &mut self,
        caller: &CallGraphNode,
        callee: &CallGraphNode,
        resolutions: TypeParameterResolutions,
    ) -> bool {
        let from = self.add_node(caller);
        let to = self.add_node(callee);
        let exists = self
            .graph
            .edges_connecting(from, to)
            .any(|edge| edge.weight().resolutions == resolutions);
        if exists {
            return false;
        }
        self.graph.add_edge(from, to, CallEdge { resolutions });
        true
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &CallGraphNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// All edges.
    pub fn edges(&self) -> impl Iterator<Item = Dependency<'_>> {
        (&self.graph).edge_references().map(move |edge| Dependency {
            caller: &self.graph[edge.source()],
            callee: &self.graph[edge.target()],
            resolutions: &edge.weight().resolutions,
        })
    }

    /// Outgoing edges of `node`; empty if the node is not in the graph.
    pub fn direct_dependencies(&self, node: &CallGraphNode) -> Vec<Dependency<'_>> {
        self.edges_directed(node, Direction::Outgoing)
    }

    /// Incoming edges of `node`; empty if the node is not in the graph.
    pub fn direct_dependents(&self, node: &CallGraphNode) -> Vec<Dependency<'_>> {
        self.edges_directed(node, Direction::Incoming)
    }

    fn edges_directed(&self, node: &CallGraphNode, direction: Direction) -> Vec<Dependency<'_>> {
        let Some(idx) = self.get_node(node) else {
            return Vec::new();
        };
        self.graph
            .edges_directed(idx, direction)
            .map(|edge| Dependency {
                caller: &self.graph[edge.source()],
                callee: &self.graph[edge.target()],
                resolutions: &edge.weight().resolutions,
            })
            .collect()
    }
}

impl Default for CallGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallGraph")
            .field("nodes", &self.node_count())
            .field("edges", &self.edge_count())
            .finish()
    }
}
