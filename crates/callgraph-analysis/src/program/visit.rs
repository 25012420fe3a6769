//! Read-only tree visitor with default traversal helpers.
//!
//! Implement the methods you care about and call the matching `walk_*`
//! function to recurse into children. Visiting never rebuilds the tree, and
//! any error returned from a callback stops the traversal.
//!
//! ```rust
//! use callgraph_analysis::program::visit::{walk_expression, Visitor};
//! use callgraph_analysis::program::TypedExpression;
//!
//! struct CountExpressions(usize);
//!
//! impl<'ast> Visitor<'ast> for CountExpressions {
//!     type Error = std::convert::Infallible;
//!
//!     fn visit_expression(&mut self, expr: &'ast TypedExpression) -> Result<(), Self::Error> {
//!         self.0 += 1;
//!         walk_expression(self, expr)
//!     }
//! }
//! ```

use super::tree::{ExpressionKind, Identifier, Scope, Statement, TypedExpression};

pub trait Visitor<'ast> {
    type Error;

    fn visit_scope(&mut self, scope: &'ast Scope) -> Result<(), Self::Error> {
        walk_scope(self, scope)
    }

    fn visit_statement(&mut self, statement: &'ast Statement) -> Result<(), Self::Error> {
        walk_statement(self, statement)
    }

    fn visit_expression(&mut self, expr: &'ast TypedExpression) -> Result<(), Self::Error> {
        walk_expression(self, expr)
    }

    /// Called for identifier expressions; `expr` is the enclosing expression.
    fn visit_identifier(
        &mut self,
        _identifier: &'ast Identifier,
        _expr: &'ast TypedExpression,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

pub fn walk_scope<'ast, V>(visitor: &mut V, scope: &'ast Scope) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    for statement in &scope.statements {
        visitor.visit_statement(statement)?;
    }
    Ok(())
}

pub fn walk_statement<'ast, V>(visitor: &mut V, statement: &'ast Statement) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    match statement {
        Statement::Expression(expr) | Statement::Return(expr) | Statement::Fail(expr) => {
            visitor.visit_expression(expr)
        }
        Statement::Let { value, .. } | Statement::Set { value, .. } => {
            visitor.visit_expression(value)
        }
        Statement::Conditional { branches, default } => {
            for (condition, body) in branches {
                visitor.visit_expression(condition)?;
                visitor.visit_scope(body)?;
            }
            if let Some(body) = default {
                visitor.visit_scope(body)?;
            }
            Ok(())
        }
        Statement::For { iterable, body, .. } => {
            visitor.visit_expression(iterable)?;
            visitor.visit_scope(body)
        }
        Statement::While { condition, body } => {
            visitor.visit_expression(condition)?;
            visitor.visit_scope(body)
        }
        Statement::Repeat { body, until, fixup } => {
            visitor.visit_scope(body)?;
            visitor.visit_expression(until)?;
            visitor.visit_scope(fixup)
        }
        Statement::Conjugation { outer, inner } => {
            visitor.visit_scope(outer)?;
            visitor.visit_scope(inner)
        }
        Statement::QubitScope {
            initializer, body, ..
        } => {
            visitor.visit_expression(initializer)?;
            visitor.visit_scope(body)
        }
    }
}

pub fn walk_expression<'ast, V>(visitor: &mut V, expr: &'ast TypedExpression) -> Result<(), V::Error>
where
    V: Visitor<'ast> + ?Sized,
{
    match &expr.kind {
        ExpressionKind::UnitValue
        | ExpressionKind::IntLiteral(_)
        | ExpressionKind::DoubleLiteral(_)
        | ExpressionKind::BoolLiteral(_)
        | ExpressionKind::StringLiteral(_)
        | ExpressionKind::ResultLiteral(_) => Ok(()),
        ExpressionKind::Identifier(identifier) => visitor.visit_identifier(identifier, expr),
        ExpressionKind::ValueTuple(items) | ExpressionKind::ValueArray(items) => {
            for item in items {
                visitor.visit_expression(item)?;
            }
            Ok(())
        }
        ExpressionKind::SizedArray { value, size } => {
            visitor.visit_expression(value)?;
            visitor.visit_expression(size)
        }
        ExpressionKind::Range { start, step, end } => {
            visitor.visit_expression(start)?;
            if let Some(step) = step {
                visitor.visit_expression(step)?;
            }
            visitor.visit_expression(end)
        }
        ExpressionKind::ArrayItem { array, index } => {
            visitor.visit_expression(array)?;
            visitor.visit_expression(index)
        }
        ExpressionKind::NamedItem { record, .. } => visitor.visit_expression(record),
        ExpressionKind::CopyAndUpdate {
            original,
            accessor,
            value,
        } => {
            visitor.visit_expression(original)?;
            visitor.visit_expression(accessor)?;
            visitor.visit_expression(value)
        }
        ExpressionKind::UnaryOperation { operand, .. } => visitor.visit_expression(operand),
        ExpressionKind::BinaryOperation { lhs, rhs, .. } => {
            visitor.visit_expression(lhs)?;
            visitor.visit_expression(rhs)
        }
        ExpressionKind::Conditional {
            condition,
            if_true,
            if_false,
        } => {
            visitor.visit_expression(condition)?;
            visitor.visit_expression(if_true)?;
            visitor.visit_expression(if_false)
        }
        ExpressionKind::UnwrapApplication(inner)
        | ExpressionKind::AdjointApplication(inner)
        | ExpressionKind::ControlledApplication(inner) => visitor.visit_expression(inner),
        ExpressionKind::Call { callee, argument } => {
            visitor.visit_expression(callee)?;
            visitor.visit_expression(argument)
        }
    }
}
