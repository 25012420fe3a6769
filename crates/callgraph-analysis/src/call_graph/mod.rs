//! Call graph over functor-aware, generically instantiated nodes, built
//! exhaustively or on demand from entry points.

pub mod builder;
pub mod functor;
pub mod resolution;
pub mod traversal;
pub mod types;
pub mod walker;
pub mod worklist;

pub use builder::{BuildMode, CallGraphBuilder, CallGraphStats};
pub use functor::FunctorContext;
pub use resolution::{ResolutionCombiner, ResolutionStack, TypeResolutionCombination};
pub use traversal::{all_dependencies, all_dependents};
pub use types::{CallEdge, CallGraph, CallGraphNode, Dependency};
