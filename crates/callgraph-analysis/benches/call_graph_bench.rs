//! Criterion benchmarks for call graph construction.
//!
//! Synthetic programs: a layered chain where each callable calls the next
//! few directly, under an adjoint, and as a value, plus a generic callable
//! instantiated at several types.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use callgraph_analysis::program::*;
use callgraph_analysis::CallGraphBuilder;

const NS: &str = "Bench";

fn name(i: usize) -> QualifiedName {
    QualifiedName::new(NS, format!("Op{i}"))
}

fn op_type() -> ResolvedType {
    ResolvedType::operation(ResolvedType::Unit, ResolvedType::Unit)
}

fn reference(i: usize) -> TypedExpression {
    TypedExpression::global(name(i), op_type())
}

fn call(callee: TypedExpression) -> Statement {
    Statement::Expression(TypedExpression::call(callee, TypedExpression::unit(), ResolvedType::Unit))
}

fn generic_identity() -> Callable {
    let identity = QualifiedName::new(NS, "Identity");
    let t = ResolvedType::type_parameter(identity.clone(), "T");
    let mut callable = Callable::new(identity, CallableKind::Function)
        .with_type_parameters(["T"])
        .with_specialization(Specialization::provided(
            SpecializationKind::Body,
            Scope::new(vec![Statement::Return(TypedExpression::local("x", t))]),
        ));
    for kind in [
        SpecializationKind::Adjoint,
        SpecializationKind::Controlled,
        SpecializationKind::ControlledAdjoint,
    ] {
        callable = callable.with_specialization(Specialization::intrinsic(kind));
    }
    callable
}

fn identity_call(ty: ResolvedType) -> Statement {
    let identity = QualifiedName::new(NS, "Identity");
    let resolutions = [(TypeParameter::new(identity.clone(), "T"), ty)]
        .into_iter()
        .collect();
    Statement::Expression(
        TypedExpression::call(
            TypedExpression::global(identity, op_type()),
            TypedExpression::unit(),
            ResolvedType::Unit,
        )
        .with_resolutions(resolutions),
    )
}

/// `size` operations; `Op{i}` references `Op{i+1}..Op{i+3}`.
fn layered_program(size: usize) -> Program {
    let instantiations = [ResolvedType::Int, ResolvedType::Bool, ResolvedType::Double];
    let mut namespace = Namespace::new(NS).with_callable(generic_identity());
    for i in 0..size {
        let mut body = Vec::new();
        if i + 1 < size {
            body.push(call(reference(i + 1)));
        }
        if i + 2 < size {
            body.push(call(TypedExpression::adjoint(reference(i + 2))));
        }
        if i + 3 < size {
            body.push(Statement::Let {
                name: "f".to_string(),
                value: reference(i + 3),
                mutable: false,
            });
        }
        body.push(identity_call(instantiations[i % instantiations.len()].clone()));

        let mut callable = Callable::new(name(i), CallableKind::Operation).with_specialization(
            Specialization::provided(SpecializationKind::Body, Scope::new(body)),
        );
        for kind in [
            SpecializationKind::Adjoint,
            SpecializationKind::Controlled,
            SpecializationKind::ControlledAdjoint,
        ] {
            callable = callable.with_specialization(Specialization::intrinsic(kind));
        }
        namespace = namespace.with_callable(callable);
    }
    Program::new(vec![namespace])
}

fn bench_demand_driven(c: &mut Criterion) {
    let mut group = c.benchmark_group("demand_driven");
    for size in [100usize, 1_000] {
        let program = layered_program(size);
        let entries = [name(0)];
        let builder = CallGraphBuilder::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| {
                let graph = builder.build(black_box(program), &entries);
                black_box(graph.map(|g| g.edge_count()).unwrap_or(0))
            })
        });
    }
    group.finish();
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    for size in [100usize, 1_000] {
        let program = layered_program(size);
        let builder = CallGraphBuilder::new();
        group.bench_with_input(BenchmarkId::from_parameter(size), &program, |b, program| {
            b.iter(|| {
                let graph = builder.build(black_box(program), &[]);
                black_box(graph.map(|g| g.edge_count()).unwrap_or(0))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_demand_driven, bench_exhaustive);
criterion_main!(benches);
