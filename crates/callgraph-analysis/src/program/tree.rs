//! Statements and typed expressions of a specialization body.

use serde::{Deserialize, Serialize};

use super::types::{QualifiedName, ResolvedType, TypeParameterResolutions};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scope {
    pub statements: Vec<Statement>,
}

impl Scope {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    Expression(TypedExpression),
    Return(TypedExpression),
    Fail(TypedExpression),
    Let {
        name: String,
        value: TypedExpression,
        mutable: bool,
    },
    Set {
        name: String,
        value: TypedExpression,
    },
    /// `if` / `elif` branches followed by an optional `else`.
    Conditional {
        branches: Vec<(TypedExpression, Scope)>,
        default: Option<Scope>,
    },
    For {
        variable: String,
        iterable: TypedExpression,
        body: Scope,
    },
    While {
        condition: TypedExpression,
        body: Scope,
    },
    Repeat {
        body: Scope,
        until: TypedExpression,
        fixup: Scope,
    },
    /// `within { outer } apply { inner }`.
    Conjugation {
        outer: Scope,
        inner: Scope,
    },
    QubitScope {
        name: String,
        initializer: TypedExpression,
        body: Scope,
    },
}

/// What an identifier refers to after name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identifier {
    GlobalCallable(QualifiedName),
    LocalVariable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOperator {
    Negate,
    Not,
    BitwiseNot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    And,
    Or,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    LeftShift,
    RightShift,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    UnitValue,
    IntLiteral(i64),
    DoubleLiteral(f64),
    BoolLiteral(bool),
    StringLiteral(String),
    ResultLiteral(bool),
    Identifier(Identifier),
    ValueTuple(Vec<TypedExpression>),
    ValueArray(Vec<TypedExpression>),
    SizedArray {
        value: Box<TypedExpression>,
        size: Box<TypedExpression>,
    },
    Range {
        start: Box<TypedExpression>,
        step: Option<Box<TypedExpression>>,
        end: Box<TypedExpression>,
    },
    ArrayItem {
        array: Box<TypedExpression>,
        index: Box<TypedExpression>,
    },
    NamedItem {
        record: Box<TypedExpression>,
        item: String,
    },
    CopyAndUpdate {
        original: Box<TypedExpression>,
        accessor: Box<TypedExpression>,
        value: Box<TypedExpression>,
    },
    UnaryOperation {
        op: UnaryOperator,
        operand: Box<TypedExpression>,
    },
    BinaryOperation {
        op: BinaryOperator,
        lhs: Box<TypedExpression>,
        rhs: Box<TypedExpression>,
    },
    Conditional {
        condition: Box<TypedExpression>,
        if_true: Box<TypedExpression>,
        if_false: Box<TypedExpression>,
    },
    UnwrapApplication(Box<TypedExpression>),
    AdjointApplication(Box<TypedExpression>),
    ControlledApplication(Box<TypedExpression>),
    Call {
        callee: Box<TypedExpression>,
        argument: Box<TypedExpression>,
    },
}

/// An expression together with its type and the generic instantiation
/// the type checker fixed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedExpression {
    pub kind: ExpressionKind,
    pub resolved_type: ResolvedType,
    /// Substitution introduced at this expression; empty when none.
    pub type_parameter_resolutions: TypeParameterResolutions,
}

impl TypedExpression {
    pub fn new(kind: ExpressionKind, resolved_type: ResolvedType) -> Self {
        Self {
            kind,
            resolved_type,
            type_parameter_resolutions: TypeParameterResolutions::new(),
        }
    }

    pub fn with_resolutions(mut self, resolutions: TypeParameterResolutions) -> Self {
        self.type_parameter_resolutions = resolutions;
        self
    }

    pub fn unit() -> Self {
        Self::new(ExpressionKind::UnitValue, ResolvedType::Unit)
    }

    pub fn int(value: i64) -> Self {
        Self::new(ExpressionKind::IntLiteral(value), ResolvedType::Int)
    }

    pub fn bool(value: bool) -> Self {
        Self::new(ExpressionKind::BoolLiteral(value), ResolvedType::Bool)
    }

    pub fn global(name: QualifiedName, resolved_type: ResolvedType) -> Self {
        Self::new(
            ExpressionKind::Identifier(Identifier::GlobalCallable(name)),
            resolved_type,
        )
    }

    pub fn local(name: impl Into<String>, resolved_type: ResolvedType) -> Self {
        Self::new(
            ExpressionKind::Identifier(Identifier::LocalVariable(name.into())),
            resolved_type,
        )
    }

    pub fn tuple(items: Vec<TypedExpression>) -> Self {
        let resolved_type = ResolvedType::Tuple(items.iter().map(|e| e.resolved_type.clone()).collect());
        Self::new(ExpressionKind::ValueTuple(items), resolved_type)
    }

    pub fn call(callee: TypedExpression, argument: TypedExpression, resolved_type: ResolvedType) -> Self {
        Self::new(
            ExpressionKind::Call {
                callee: Box::new(callee),
                argument: Box::new(argument),
            },
            resolved_type,
        )
    }

    pub fn adjoint(inner: TypedExpression) -> Self {
        let resolved_type = inner.resolved_type.clone();
        Self::new(ExpressionKind::AdjointApplication(Box::new(inner)), resolved_type)
    }

    pub fn controlled(inner: TypedExpression) -> Self {
        let resolved_type = inner.resolved_type.clone();
        Self::new(ExpressionKind::ControlledApplication(Box::new(inner)), resolved_type)
    }
}
