//! Call graph construction over type-checked programs.
//!
//! Nodes are fully resolved invocable units: a callable, one of its four
//! functor specializations, and a concrete generic instantiation. Edges
//! record the type parameter resolution active at the call site.

pub mod call_graph;
pub mod program;

pub use call_graph::{CallGraph, CallGraphBuilder, CallGraphNode};
