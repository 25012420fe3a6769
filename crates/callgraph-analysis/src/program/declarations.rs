//! Namespaces, callables and their specializations.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tree::Scope;
use super::types::{QualifiedName, ResolvedType, TypeParameter};

/// The four functor variants a callable may provide a body for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecializationKind {
    Body,
    Adjoint,
    Controlled,
    ControlledAdjoint,
}

impl SpecializationKind {
    /// Every variant, in declaration order.
    pub const ALL: [SpecializationKind; 4] = [
        Self::Body,
        Self::Adjoint,
        Self::Controlled,
        Self::ControlledAdjoint,
    ];

    /// The variant reached under the given functor state.
    pub fn from_functors(adjoint: bool, controlled: bool) -> Self {
        match (adjoint, controlled) {
            (false, false) => Self::Body,
            (true, false) => Self::Adjoint,
            (false, true) => Self::Controlled,
            (true, true) => Self::ControlledAdjoint,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Adjoint => "adjoint",
            Self::Controlled => "controlled",
            Self::ControlledAdjoint => "controlled adjoint",
        }
    }
}

impl fmt::Display for SpecializationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CallableKind {
    Function,
    Operation,
    TypeConstructor,
}

/// How a specialization is implemented. Only `Provided` carries a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SpecializationImplementation {
    Provided(Scope),
    Intrinsic,
    External,
    /// Still to be generated from another specialization by a later pass.
    Generated,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    pub kind: SpecializationKind,
    /// `None` for the generic template; `Some` for an explicit instantiation.
    pub type_arguments: Option<Vec<ResolvedType>>,
    pub implementation: SpecializationImplementation,
}

impl Specialization {
    pub fn provided(kind: SpecializationKind, body: Scope) -> Self {
        Self {
            kind,
            type_arguments: None,
            implementation: SpecializationImplementation::Provided(body),
        }
    }

    pub fn intrinsic(kind: SpecializationKind) -> Self {
        Self {
            kind,
            type_arguments: None,
            implementation: SpecializationImplementation::Intrinsic,
        }
    }

    pub fn with_type_arguments(mut self, type_arguments: Vec<ResolvedType>) -> Self {
        self.type_arguments = Some(type_arguments);
        self
    }

    /// The statement tree, if this specialization has one.
    pub fn body(&self) -> Option<&Scope> {
        match &self.implementation {
            SpecializationImplementation::Provided(scope) => Some(scope),
            _ => None,
        }
    }

    /// True for the generic template (no explicit type arguments).
    pub fn is_template(&self) -> bool {
        self.type_arguments.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callable {
    pub name: QualifiedName,
    pub kind: CallableKind,
    /// Declared generic parameter names, in declaration order.
    pub type_parameters: Vec<String>,
    pub specializations: Vec<Specialization>,
}

impl Callable {
    pub fn new(name: QualifiedName, kind: CallableKind) -> Self {
        Self {
            name,
            kind,
            type_parameters: Vec::new(),
            specializations: Vec::new(),
        }
    }

    pub fn with_type_parameters<I, S>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_parameters = params.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_specialization(mut self, specialization: Specialization) -> Self {
        self.specializations.push(specialization);
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }

    /// Keys of the declared type parameters, in declaration order.
    pub fn type_parameter_keys(&self) -> impl Iterator<Item = TypeParameter> + '_ {
        self.type_parameters
            .iter()
            .map(|name| TypeParameter::new(self.name.clone(), name.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    pub callables: Vec<Callable>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            callables: Vec::new(),
        }
    }

    pub fn with_callable(mut self, callable: Callable) -> Self {
        self.callables.push(callable);
        self
    }
}

/// A whole compilation unit, already type-checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub namespaces: Vec<Namespace>,
}

impl Program {
    pub fn new(namespaces: Vec<Namespace>) -> Self {
        Self { namespaces }
    }

    /// Every callable across all namespaces.
    pub fn callables(&self) -> impl Iterator<Item = &Callable> {
        self.namespaces.iter().flat_map(|ns| ns.callables.iter())
    }
}
