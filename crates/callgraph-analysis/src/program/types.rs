//! Names, resolved types and type parameter resolutions.

use std::fmt;

use callgraph_core::types::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Globally unique name of a callable: namespace plus declared name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QualifiedName {
    pub namespace: String,
    pub name: String,
}

impl QualifiedName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Parse a dotted name; the last segment is the callable name.
    ///
    /// Returns `None` when either the namespace or the name would be empty.
    pub fn parse(dotted: &str) -> Option<Self> {
        let (namespace, name) = dotted.trim().rsplit_once('.')?;
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(namespace, name))
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// A generic parameter owned by a specific callable. Parameter names are
/// only unique per callable, so the owner is part of the identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeParameter {
    pub origin: QualifiedName,
    pub name: String,
}

impl TypeParameter {
    pub fn new(origin: QualifiedName, name: impl Into<String>) -> Self {
        Self {
            origin,
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.'{}", self.origin, self.name)
    }
}

/// One substitution: type parameter -> resolved type.
///
/// Ordered so that two equal substitutions hash and compare equal.
pub type TypeParameterResolutions = BTreeMap<TypeParameter, ResolvedType>;

/// A fully type-checked type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResolvedType {
    Unit,
    Int,
    BigInt,
    Double,
    Bool,
    String,
    Qubit,
    Result,
    Pauli,
    Range,
    Array(Box<ResolvedType>),
    Tuple(Vec<ResolvedType>),
    Function(Box<ResolvedType>, Box<ResolvedType>),
    Operation(Box<ResolvedType>, Box<ResolvedType>),
    UserDefined(QualifiedName),
    TypeParameter(TypeParameter),
    /// Placeholder for a type the checker could not determine.
    Missing,
}

impl ResolvedType {
    pub fn array(item: ResolvedType) -> Self {
        Self::Array(Box::new(item))
    }

    pub fn function(input: ResolvedType, output: ResolvedType) -> Self {
        Self::Function(Box::new(input), Box::new(output))
    }

    pub fn operation(input: ResolvedType, output: ResolvedType) -> Self {
        Self::Operation(Box::new(input), Box::new(output))
    }

    pub fn type_parameter(origin: QualifiedName, name: impl Into<String>) -> Self {
        Self::TypeParameter(TypeParameter::new(origin, name))
    }

    /// Replace every type parameter bound in `resolutions`. Unbound
    /// parameters are left in place.
    pub fn substitute(&self, resolutions: &TypeParameterResolutions) -> ResolvedType {
        if resolutions.is_empty() {
            return self.clone();
        }
        match self {
            Self::TypeParameter(param) => resolutions
                .get(param)
                .cloned()
                .unwrap_or_else(|| self.clone()),
            Self::Array(item) => Self::Array(Box::new(item.substitute(resolutions))),
            Self::Tuple(items) => {
                Self::Tuple(items.iter().map(|t| t.substitute(resolutions)).collect())
            }
            Self::Function(input, output) => Self::Function(
                Box::new(input.substitute(resolutions)),
                Box::new(output.substitute(resolutions)),
            ),
            Self::Operation(input, output) => Self::Operation(
                Box::new(input.substitute(resolutions)),
                Box::new(output.substitute(resolutions)),
            ),
            _ => self.clone(),
        }
    }

    /// True if `param` occurs anywhere inside this type.
    pub fn contains_type_parameter(&self, param: &TypeParameter) -> bool {
        match self {
            Self::TypeParameter(p) => p == param,
            Self::Array(item) => item.contains_type_parameter(param),
            Self::Tuple(items) => items.iter().any(|t| t.contains_type_parameter(param)),
            Self::Function(input, output) | Self::Operation(input, output) => {
                input.contains_type_parameter(param) || output.contains_type_parameter(param)
            }
            _ => false,
        }
    }

    /// True if this type is exactly the parameter `param`.
    pub fn is_type_parameter(&self, param: &TypeParameter) -> bool {
        matches!(self, Self::TypeParameter(p) if p == param)
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unit => f.write_str("Unit"),
            Self::Int => f.write_str("Int"),
            Self::BigInt => f.write_str("BigInt"),
            Self::Double => f.write_str("Double"),
            Self::Bool => f.write_str("Bool"),
            Self::String => f.write_str("String"),
            Self::Qubit => f.write_str("Qubit"),
            Self::Result => f.write_str("Result"),
            Self::Pauli => f.write_str("Pauli"),
            Self::Range => f.write_str("Range"),
            Self::Array(item) => write!(f, "{item}[]"),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::Function(input, output) => write!(f, "({input} -> {output})"),
            Self::Operation(input, output) => write!(f, "({input} => {output})"),
            Self::UserDefined(name) => write!(f, "{name}"),
            Self::TypeParameter(param) => write!(f, "'{}", param.name),
            Self::Missing => f.write_str("?"),
        }
    }
}
