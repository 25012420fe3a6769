use std::collections::{BTreeSet, VecDeque};

use callgraph_analysis::program::*;
use callgraph_analysis::{CallGraph, CallGraphBuilder, CallGraphNode};
use proptest::prelude::*;

#[path = "../common/mod.rs"]
mod common;

use common::*;

/// How callable `i` refers to another callable from its body.
#[derive(Debug, Clone, Copy)]
enum Reference {
    Direct,
    Adjoint,
    FirstClass,
}

type Shape = Vec<Vec<(usize, Reference)>>;

fn shape() -> impl Strategy<Value = Shape> {
    (1usize..8).prop_flat_map(|n| {
        let reference = prop_oneof![
            Just(Reference::Direct),
            Just(Reference::Adjoint),
            Just(Reference::FirstClass),
        ];
        prop::collection::vec(prop::collection::vec((0..n, reference), 0..4), n)
    })
}

fn callable_name(i: usize) -> String {
    format!("C{i}")
}

fn to_program(shape: &Shape) -> Program {
    let callables = shape
        .iter()
        .enumerate()
        .map(|(i, refs)| {
            let body = refs
                .iter()
                .map(|&(j, reference)| {
                    let target = global(&callable_name(j));
                    match reference {
                        Reference::Direct => call(target),
                        Reference::Adjoint => call(TypedExpression::adjoint(target)),
                        Reference::FirstClass => bind(target),
                    }
                })
                .collect();
            functor_operation(&callable_name(i), body)
        })
        .collect();
    program(callables)
}

/// Nodes reachable from `C0`'s body, computed without the builder. Only
/// body specializations are provided, so only they have outgoing edges.
fn expected_closure(shape: &Shape) -> BTreeSet<CallGraphNode> {
    let mut seen = BTreeSet::from([body_node(&callable_name(0))]);
    let mut queue = VecDeque::from([0usize]);
    while let Some(i) = queue.pop_front() {
        for &(j, reference) in &shape[i] {
            let kinds: &[SpecializationKind] = match reference {
                Reference::Direct => &[SpecializationKind::Body],
                Reference::Adjoint => &[SpecializationKind::Adjoint],
                Reference::FirstClass => &SpecializationKind::ALL,
            };
            for &kind in kinds {
                if seen.insert(node(&callable_name(j), kind, None)) && kind == SpecializationKind::Body {
                    queue.push_back(j);
                }
            }
        }
    }
    seen
}

fn edge_keys(graph: &CallGraph) -> Vec<(CallGraphNode, CallGraphNode, TypeParameterResolutions)> {
    graph
        .edges()
        .map(|dep| (dep.caller.clone(), dep.callee.clone(), dep.resolutions.clone()))
        .collect()
}

proptest! {
    #[test]
    fn demand_driven_nodes_match_reachability(shape in shape()) {
        let program = to_program(&shape);
        let graph = CallGraphBuilder::new()
            .build(&program, &[name(&callable_name(0))])
            .unwrap();
        let actual: BTreeSet<CallGraphNode> = graph.nodes().cloned().collect();
        prop_assert_eq!(actual, expected_closure(&shape));
    }

    #[test]
    fn every_edge_is_stored_once(shape in shape()) {
        let program = to_program(&shape);
        for entries in [vec![name(&callable_name(0))], Vec::new()] {
            let graph = CallGraphBuilder::new().build(&program, &entries).unwrap();
            let keys = edge_keys(&graph);
            let unique: BTreeSet<_> = keys.iter().cloned().collect();
            prop_assert_eq!(keys.len(), unique.len());
        }
    }

    #[test]
    fn exhaustive_covers_demand_driven(shape in shape()) {
        let program = to_program(&shape);
        let demand = CallGraphBuilder::new()
            .build(&program, &[name(&callable_name(0))])
            .unwrap();
        let exhaustive = CallGraphBuilder::new().build(&program, &[]).unwrap();

        let all_edges: BTreeSet<_> = edge_keys(&exhaustive).into_iter().collect();
        for edge in edge_keys(&demand) {
            prop_assert!(all_edges.contains(&edge), "missing edge {} -> {}", edge.0, edge.1);
        }
    }

    #[test]
    fn distinct_references_give_distinct_edges(shape in shape()) {
        let program = to_program(&shape);
        let graph = CallGraphBuilder::new().build(&program, &[]).unwrap();

        let mut expected = BTreeSet::new();
        for (i, refs) in shape.iter().enumerate() {
            for &(j, reference) in refs {
                let kinds: &[SpecializationKind] = match reference {
                    Reference::Direct => &[SpecializationKind::Body],
                    Reference::Adjoint => &[SpecializationKind::Adjoint],
                    Reference::FirstClass => &SpecializationKind::ALL,
                };
                for &kind in kinds {
                    expected.insert((body_node(&callable_name(i)), node(&callable_name(j), kind, None)));
                }
            }
        }
        prop_assert_eq!(graph.edge_count(), expected.len());
    }
}
