//! Single read-only pass over one specialization body, recording an edge
//! for every reference to a global callable.

use callgraph_core::errors::CallGraphError;
use callgraph_core::types::collections::FxHashMap;

use crate::program::visit::{walk_expression, walk_statement, Visitor};
use crate::program::{
    Callable, ExpressionKind, Identifier, QualifiedName, Scope, SpecializationKind, Statement,
    TypeParameterResolutions, TypedExpression,
};

use super::functor::FunctorContext;
use super::resolution::{ResolutionCombiner, ResolutionStack};
use super::types::{CallGraph, CallGraphNode};
use super::worklist::Worklist;

/// Callables by qualified name, built once per construction run.
pub type GlobalIndex<'ast> = FxHashMap<&'ast QualifiedName, &'ast Callable>;

/// Per-run knobs that do not change what is recorded.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkOptions {
    pub max_nodes: Option<usize>,
    pub trace_edges: bool,
}

/// Walks the body of `caller`, writing edges into `graph` and offering
/// every callee to `worklist`.
pub struct TreeWalker<'ast, 'run> {
    globals: &'run GlobalIndex<'ast>,
    combiner: &'run dyn ResolutionCombiner,
    caller: &'run CallGraphNode,
    caller_resolutions: &'run TypeParameterResolutions,
    graph: &'run mut CallGraph,
    worklist: &'run mut Worklist,
    options: WalkOptions,
    context: FunctorContext,
    resolutions: ResolutionStack<'ast>,
}

impl<'ast, 'run> TreeWalker<'ast, 'run> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        globals: &'run GlobalIndex<'ast>,
        combiner: &'run dyn ResolutionCombiner,
        caller: &'run CallGraphNode,
        caller_resolutions: &'run TypeParameterResolutions,
        graph: &'run mut CallGraph,
        worklist: &'run mut Worklist,
        options: WalkOptions,
    ) -> Self {
        Self {
            globals,
            combiner,
            caller,
            caller_resolutions,
            graph,
            worklist,
            options,
            context: FunctorContext::default(),
            resolutions: ResolutionStack::new(),
        }
    }

    /// Walk one specialization body.
    pub fn walk(mut self, body: &'ast Scope) -> Result<(), CallGraphError> {
        self.visit_scope(body)
    }

    /// Run `f` under `context`, restoring the enclosing context afterwards.
    fn with_context<T>(&mut self, context: FunctorContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    fn on_global_callable(&mut self, name: &'ast QualifiedName) -> Result<(), CallGraphError> {
        let combined = self
            .resolutions
            .consume(self.caller_resolutions, self.combiner)?;

        let callable = self.globals.get(name).copied().ok_or_else(|| {
            CallGraphError::UndeclaredCallable {
                name: name.to_string(),
            }
        })?;

        let mut resolutions = TypeParameterResolutions::new();
        let mut type_arguments = Vec::with_capacity(callable.type_parameters.len());
        for param in callable.type_parameter_keys() {
            let resolved = combined.get(&param).cloned().ok_or_else(|| {
                CallGraphError::UnresolvedTypeParameter {
                    callable: name.to_string(),
                    parameter: param.name.clone(),
                    caller: self.caller.to_string(),
                }
            })?;
            type_arguments.push(resolved.clone());
            resolutions.insert(param, resolved);
        }
        let type_arguments = callable.is_generic().then_some(type_arguments);

        if self.context.is_direct_call_target {
            let callee = CallGraphNode::new(
                name.clone(),
                self.context.specialization_kind(),
                type_arguments,
            );
            self.record(callee, resolutions)
        } else {
            // Used as a value: a functor may be applied out of our sight.
            for kind in SpecializationKind::ALL {
                let callee = CallGraphNode::new(name.clone(), kind, type_arguments.clone());
                self.record(callee, resolutions.clone())?;
            }
            Ok(())
        }
    }

    /// Store the edge first, then offer the callee to the worklist.
    fn record(
        &mut self,
        callee: CallGraphNode,
        resolutions: TypeParameterResolutions,
    ) -> Result<(), CallGraphError> {
        let inserted = self.graph.add_dependency(self.caller, &callee, resolutions);
        if self.options.trace_edges {
            tracing::trace!(caller = %self.caller, callee = %callee, inserted, "call edge");
        }
        if let Some(limit) = self.options.max_nodes {
            if self.graph.node_count() > limit {
                return Err(CallGraphError::NodeLimitExceeded { limit });
            }
        }
        if self.worklist.offer(&callee) {
            tracing::debug!(node = %callee, "enqueued");
        }
        Ok(())
    }
}

impl<'ast, 'run> Visitor<'ast> for TreeWalker<'ast, 'run> {
    type Error = CallGraphError;

    fn visit_statement(&mut self, statement: &'ast Statement) -> Result<(), Self::Error> {
        // Substitutions never carry over from a previous statement.
        self.resolutions.clear();
        walk_statement(self, statement)
    }

    fn visit_expression(&mut self, expr: &'ast TypedExpression) -> Result<(), Self::Error> {
        // Maps pushed below this expression must not reach its siblings.
        let depth = self.resolutions.len();
        self.resolutions.push(&expr.type_parameter_resolutions);

        let context = self.context;
        let result = match &expr.kind {
            ExpressionKind::Call { callee, argument } => {
                self.with_context(context.call_target(), |w| w.visit_expression(callee))?;
                self.with_context(context.value_position(), |w| w.visit_expression(argument))
            }
            ExpressionKind::AdjointApplication(inner) => {
                self.with_context(context.adjoint(), |w| w.visit_expression(inner))
            }
            ExpressionKind::ControlledApplication(inner) => {
                self.with_context(context.controlled(), |w| w.visit_expression(inner))
            }
            ExpressionKind::UnwrapApplication(inner) => self.visit_expression(inner),
            ExpressionKind::Conditional {
                condition,
                if_true,
                if_false,
            } => {
                // Either branch may be the value that gets called.
                self.with_context(context.value_position(), |w| w.visit_expression(condition))?;
                self.visit_expression(if_true)?;
                self.visit_expression(if_false)
            }
            ExpressionKind::Identifier(_) => walk_expression(self, expr),
            _ => self.with_context(context.value_position(), |w| walk_expression(w, expr)),
        };
        self.resolutions.truncate(depth);
        result
    }

    fn visit_identifier(
        &mut self,
        identifier: &'ast Identifier,
        _expr: &'ast TypedExpression,
    ) -> Result<(), Self::Error> {
        match identifier {
            Identifier::GlobalCallable(name) => self.on_global_callable(name),
            Identifier::LocalVariable(_) => Ok(()),
        }
    }
}
