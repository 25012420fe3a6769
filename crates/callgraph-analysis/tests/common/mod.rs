//! Program fixtures shared by the integration tests.

#![allow(dead_code)]

use callgraph_analysis::program::*;

pub const NS: &str = "Test";

pub fn name(callable: &str) -> QualifiedName {
    QualifiedName::new(NS, callable)
}

pub fn op_type() -> ResolvedType {
    ResolvedType::operation(ResolvedType::Unit, ResolvedType::Unit)
}

pub fn param(callable: &str, param: &str) -> TypeParameter {
    TypeParameter::new(name(callable), param)
}

pub fn resolutions(entries: &[(TypeParameter, ResolvedType)]) -> TypeParameterResolutions {
    entries.iter().cloned().collect()
}

/// A reference to a global callable.
pub fn global(callable: &str) -> TypedExpression {
    TypedExpression::global(name(callable), op_type())
}

/// `callee(())` as a statement.
pub fn call(callee: TypedExpression) -> Statement {
    Statement::Expression(call_expr(callee))
}

pub fn call_expr(callee: TypedExpression) -> TypedExpression {
    TypedExpression::call(callee, TypedExpression::unit(), ResolvedType::Unit)
}

/// `callee(())` where the call instantiates the callee's generics.
pub fn generic_call(callee: &str, res: TypeParameterResolutions) -> Statement {
    Statement::Expression(call_expr(global(callee)).with_resolutions(res))
}

/// `let name = value;`
pub fn bind(value: TypedExpression) -> Statement {
    Statement::Let {
        name: "f".to_string(),
        value,
        mutable: false,
    }
}

/// An operation with a provided body and no other specializations.
pub fn operation(callable: &str, body: Vec<Statement>) -> Callable {
    Callable::new(name(callable), CallableKind::Operation).with_specialization(
        Specialization::provided(SpecializationKind::Body, Scope::new(body)),
    )
}

/// An operation with a provided body and intrinsic adjoint/controlled variants.
pub fn functor_operation(callable: &str, body: Vec<Statement>) -> Callable {
    Callable::new(name(callable), CallableKind::Operation)
        .with_specialization(Specialization::provided(
            SpecializationKind::Body,
            Scope::new(body),
        ))
        .with_specialization(Specialization::intrinsic(SpecializationKind::Adjoint))
        .with_specialization(Specialization::intrinsic(SpecializationKind::Controlled))
        .with_specialization(Specialization::intrinsic(
            SpecializationKind::ControlledAdjoint,
        ))
}

/// An operation whose four specializations are all intrinsic.
pub fn intrinsic(callable: &str) -> Callable {
    let mut op = Callable::new(name(callable), CallableKind::Operation);
    for kind in SpecializationKind::ALL {
        op = op.with_specialization(Specialization::intrinsic(kind));
    }
    op
}

pub fn program(callables: Vec<Callable>) -> Program {
    let mut ns = Namespace::new(NS);
    for callable in callables {
        ns = ns.with_callable(callable);
    }
    Program::new(vec![ns])
}

pub fn body_node(callable: &str) -> callgraph_analysis::CallGraphNode {
    callgraph_analysis::CallGraphNode::body(name(callable))
}

pub fn node(
    callable: &str,
    kind: SpecializationKind,
    type_arguments: Option<Vec<ResolvedType>>,
) -> callgraph_analysis::CallGraphNode {
    callgraph_analysis::CallGraphNode::new(name(callable), kind, type_arguments)
}
