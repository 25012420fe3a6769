//! Call graph construction errors.
//!
//! All of these are invariant violations against an already type-checked
//! program. Any of them aborts the whole construction run.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while building a call graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallGraphError {
    #[error("Couldn't find definition for callable: {name}")]
    UndeclaredCallable { name: String },

    #[error("No {kind} specialization without type arguments found for {callable}")]
    SpecializationNotFound { callable: String, kind: String },

    #[error("Found {count} {kind} specializations without type arguments for {callable}, expected exactly one")]
    AmbiguousSpecialization {
        callable: String,
        kind: String,
        count: usize,
    },

    #[error("{callable} declares {expected} type parameters but {found} type arguments were given")]
    TypeArgumentArityMismatch {
        callable: String,
        expected: usize,
        found: usize,
    },

    #[error("Type parameter {parameter} of {callable} is unresolved at a reference from {caller}")]
    UnresolvedTypeParameter {
        callable: String,
        parameter: String,
        caller: String,
    },

    #[error("Conflicting resolutions for type parameter {parameter}: {first} and {second}")]
    ResolutionConflict {
        parameter: String,
        first: String,
        second: String,
    },

    #[error("Type parameter {parameter} resolves to {resolved}, which refers to itself")]
    SelfReferentialResolution { parameter: String, resolved: String },

    #[error("Call graph exceeded the configured limit of {limit} nodes")]
    NodeLimitExceeded { limit: usize },
}

impl ErrorCode for CallGraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UndeclaredCallable { .. } => error_code::UNDECLARED_CALLABLE,
            Self::SpecializationNotFound { .. } => error_code::SPECIALIZATION_NOT_FOUND,
            Self::AmbiguousSpecialization { .. } => error_code::AMBIGUOUS_SPECIALIZATION,
            Self::TypeArgumentArityMismatch { .. } => error_code::TYPE_ARGUMENT_ARITY,
            Self::UnresolvedTypeParameter { .. } => error_code::UNRESOLVED_TYPE_PARAMETER,
            Self::ResolutionConflict { .. } | Self::SelfReferentialResolution { .. } => {
                error_code::RESOLUTION_CONFLICT
            }
            Self::NodeLimitExceeded { .. } => error_code::NODE_LIMIT_EXCEEDED,
        }
    }
}
