//! Type-checked program representation consumed by the call graph pass.
//!
//! Namespaces hold callables, callables hold up to four specializations,
//! and provided specializations carry a statement tree.

pub mod declarations;
pub mod tree;
pub mod types;
pub mod visit;

pub use declarations::{
    Callable, CallableKind, Namespace, Program, Specialization, SpecializationImplementation,
    SpecializationKind,
};
pub use tree::{
    BinaryOperator, ExpressionKind, Identifier, Scope, Statement, TypedExpression, UnaryOperator,
};
pub use types::{QualifiedName, ResolvedType, TypeParameter, TypeParameterResolutions};
pub use visit::Visitor;
