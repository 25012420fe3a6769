//! Tests for the error handling system.

use std::collections::HashSet;

use callgraph_core::errors::error_code::{self, ErrorCode};
use callgraph_core::errors::*;

fn all_call_graph_errors() -> Vec<CallGraphError> {
    vec![
        CallGraphError::UndeclaredCallable { name: "Ns.Missing".into() },
        CallGraphError::SpecializationNotFound {
            callable: "Ns.Op".into(),
            kind: "adjoint".into(),
        },
        CallGraphError::AmbiguousSpecialization {
            callable: "Ns.Op".into(),
            kind: "body".into(),
            count: 2,
        },
        CallGraphError::TypeArgumentArityMismatch {
            callable: "Ns.Identity".into(),
            expected: 1,
            found: 2,
        },
        CallGraphError::UnresolvedTypeParameter {
            callable: "Ns.Identity".into(),
            parameter: "T".into(),
            caller: "Ns.Main".into(),
        },
        CallGraphError::ResolutionConflict {
            parameter: "Ns.Identity.T".into(),
            first: "Int".into(),
            second: "Bool".into(),
        },
        CallGraphError::SelfReferentialResolution {
            parameter: "Ns.Identity.T".into(),
            resolved: "'T[]".into(),
        },
        CallGraphError::NodeLimitExceeded { limit: 10 },
    ]
}

#[test]
fn test_all_errors_have_error_code() {
    for err in all_call_graph_errors() {
        assert!(!err.error_code().is_empty(), "{err} has no code");
    }
    let config = ConfigError::FileNotFound { path: "/tmp".into() };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_fatal_conditions_have_distinct_codes() {
    let codes: HashSet<&str> = all_call_graph_errors()
        .iter()
        .take(5)
        .map(|e| e.error_code())
        .collect();
    assert_eq!(codes.len(), 5);
}

#[test]
fn test_from_conversions() {
    let err: AnalysisError = CallGraphError::NodeLimitExceeded { limit: 3 }.into();
    assert!(matches!(err, AnalysisError::CallGraph(CallGraphError::NodeLimitExceeded { limit: 3 })));
    assert_eq!(err.error_code(), error_code::NODE_LIMIT_EXCEEDED);

    let err: AnalysisError = ConfigError::InvalidValue {
        field: "max_nodes".into(),
        message: "bad".into(),
    }
    .into();
    assert!(matches!(err, AnalysisError::Config(_)));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_coded_string_format() {
    let err = CallGraphError::UndeclaredCallable { name: "Ns.Missing".into() };
    assert_eq!(
        err.coded_string(),
        "[UNDECLARED_CALLABLE] Couldn't find definition for callable: Ns.Missing"
    );
}

#[test]
fn test_messages_name_the_culprit() {
    let err = CallGraphError::UnresolvedTypeParameter {
        callable: "Ns.Identity".into(),
        parameter: "T".into(),
        caller: "Ns.Main".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("Ns.Identity"));
    assert!(msg.contains("Ns.Main"));
    assert!(msg.contains('T'));
}
