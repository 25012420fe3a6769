//! Call graph builder: exhaustive or demand-driven traversal of a program.

use std::fmt;
use std::time::{Duration, Instant};

use callgraph_core::config::CallGraphConfig;
use callgraph_core::errors::{AnalysisError, CallGraphError, ConfigError};

use crate::program::{
    Callable, Program, QualifiedName, ResolvedType, Specialization, SpecializationKind,
    TypeParameterResolutions,
};

use super::resolution::{ResolutionCombiner, TypeResolutionCombination};
use super::types::{CallGraph, CallGraphNode};
use super::walker::{GlobalIndex, TreeWalker, WalkOptions};
use super::worklist::Worklist;

/// How a build visited the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Every specialization of every callable.
    Exhaustive,
    /// Only what is reachable from the entry points.
    DemandDriven,
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => f.write_str("exhaustive"),
            Self::DemandDriven => f.write_str("demand-driven"),
        }
    }
}

/// Statistics from a call graph build.
#[derive(Debug, Clone)]
pub struct CallGraphStats {
    pub mode: BuildMode,
    /// Specialization bodies handed to the walker (including bodiless ones).
    pub specializations_processed: usize,
    pub total_nodes: usize,
    pub total_edges: usize,
    pub build_duration: Duration,
}

/// Builds call graphs from type-checked programs.
pub struct CallGraphBuilder {
    combiner: Box<dyn ResolutionCombiner>,
    options: WalkOptions,
}

impl CallGraphBuilder {
    /// A builder using the default resolution combination.
    pub fn new() -> Self {
        Self {
            combiner: Box::new(TypeResolutionCombination),
            options: WalkOptions::default(),
        }
    }

    /// A builder honouring `config`'s node limit and tracing flag.
    /// Entry points are read by [`CallGraphBuilder::build_configured`].
    pub fn from_config(config: &CallGraphConfig) -> Self {
        Self::new()
            .with_max_nodes(config.max_nodes)
            .with_trace_edges(config.effective_trace_edges())
    }

    /// Replace the resolution combination function.
    pub fn with_combiner(mut self, combiner: impl ResolutionCombiner + 'static) -> Self {
        self.combiner = Box::new(combiner);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: Option<usize>) -> Self {
        self.options.max_nodes = max_nodes;
        self
    }

    pub fn with_trace_edges(mut self, trace_edges: bool) -> Self {
        self.options.trace_edges = trace_edges;
        self
    }

    /// Build the call graph of `program`.
    ///
    /// With no entry points every specialization is visited once; otherwise
    /// only specializations reachable from `(entry, Body, unspecified)` are.
    /// Any invariant violation aborts the build and no graph is returned.
    pub fn build(
        &self,
        program: &Program,
        entry_points: &[QualifiedName],
    ) -> Result<CallGraph, CallGraphError> {
        self.build_with_stats(program, entry_points)
            .map(|(graph, _)| graph)
    }

    /// Like [`CallGraphBuilder::build`], also returning build statistics.
    pub fn build_with_stats(
        &self,
        program: &Program,
        entry_points: &[QualifiedName],
    ) -> Result<(CallGraph, CallGraphStats), CallGraphError> {
        let start = Instant::now();
        let globals = index_callables(program);

        let mut run = BuildRun {
            globals: &globals,
            combiner: self.combiner.as_ref(),
            options: self.options,
            graph: CallGraph::new(),
            processed: 0,
        };

        let mode = if entry_points.is_empty() {
            tracing::info!(callables = globals.len(), "building call graph exhaustively");
            run.exhaustive(program)?;
            BuildMode::Exhaustive
        } else {
            tracing::info!(
                callables = globals.len(),
                entry_points = entry_points.len(),
                "building call graph from entry points"
            );
            run.demand_driven(entry_points)?;
            BuildMode::DemandDriven
        };

        let graph = run.graph;
        let stats = CallGraphStats {
            mode,
            specializations_processed: run.processed,
            total_nodes: graph.node_count(),
            total_edges: graph.edge_count(),
            build_duration: start.elapsed(),
        };
        tracing::info!(
            mode = %stats.mode,
            nodes = stats.total_nodes,
            edges = stats.total_edges,
            processed = stats.specializations_processed,
            duration_us = stats.build_duration.as_micros() as u64,
            "call graph built"
        );
        Ok((graph, stats))
    }

    /// Build with the entry points named in `config`.
    pub fn build_configured(
        program: &Program,
        config: &CallGraphConfig,
    ) -> Result<CallGraph, AnalysisError> {
        let entry_points = config
            .entry_points
            .iter()
            .map(|entry| {
                QualifiedName::parse(entry).ok_or_else(|| ConfigError::InvalidValue {
                    field: "call_graph.entry_points".to_string(),
                    message: format!("`{entry}` is not a qualified name"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_config(config).build(program, &entry_points)?)
    }
}

impl Default for CallGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Transient state of one construction run.
struct BuildRun<'ast, 'run> {
    globals: &'run GlobalIndex<'ast>,
    combiner: &'run dyn ResolutionCombiner,
    options: WalkOptions,
    graph: CallGraph,
    processed: usize,
}

impl<'ast, 'run> BuildRun<'ast, 'run> {
    fn exhaustive(&mut self, program: &'ast Program) -> Result<(), CallGraphError> {
        let mut worklist = Worklist::inactive();
        for namespace in &program.namespaces {
            for callable in &namespace.callables {
                for spec in &callable.specializations {
                    let caller_resolutions =
                        caller_resolutions(callable, spec.type_arguments.as_deref())?;
                    let caller = CallGraphNode::new(
                        callable.name.clone(),
                        spec.kind,
                        spec.type_arguments.clone(),
                    );
                    self.walk(&caller, &caller_resolutions, spec, &mut worklist)?;
                }
            }
        }
        Ok(())
    }

    fn demand_driven(&mut self, entry_points: &[QualifiedName]) -> Result<(), CallGraphError> {
        let mut worklist = Worklist::demand_driven();
        for entry in entry_points {
            worklist.offer(&CallGraphNode::body(entry.clone()));
        }

        while let Some(node) = worklist.pop() {
            let callable = self.globals.get(&node.callable).copied().ok_or_else(|| {
                CallGraphError::UndeclaredCallable {
                    name: node.callable.to_string(),
                }
            })?;
            let spec = find_template(callable, node.kind)?;
            let caller_resolutions =
                caller_resolutions(callable, node.type_arguments.as_deref())?;

            self.graph.add_node(&node);
            if let Some(limit) = self.options.max_nodes {
                if self.graph.node_count() > limit {
                    return Err(CallGraphError::NodeLimitExceeded { limit });
                }
            }
            self.walk(&node, &caller_resolutions, spec, &mut worklist)?;
        }
        Ok(())
    }

    fn walk(
        &mut self,
        caller: &CallGraphNode,
        caller_resolutions: &TypeParameterResolutions,
        spec: &'ast Specialization,
        worklist: &mut Worklist,
    ) -> Result<(), CallGraphError> {
        self.processed += 1;
        let Some(body) = spec.body() else {
            tracing::debug!(node = %caller, "no body to walk");
            return Ok(());
        };
        tracing::debug!(node = %caller, pending = worklist.pending_len(), "walking specialization");
        TreeWalker::new(
            self.globals,
            self.combiner,
            caller,
            caller_resolutions,
            &mut self.graph,
            worklist,
            self.options,
        )
        .walk(body)
    }
}

/// The unique generic template of `callable` for `kind`.
fn find_template(
    callable: &Callable,
    kind: SpecializationKind,
) -> Result<&Specialization, CallGraphError> {
    let mut matching = callable
        .specializations
        .iter()
        .filter(|spec| spec.kind == kind && spec.is_template());
    match (matching.next(), matching.next()) {
        (Some(spec), None) => Ok(spec),
        (None, _) => Err(CallGraphError::SpecializationNotFound {
            callable: callable.name.to_string(),
            kind: kind.to_string(),
        }),
        (Some(_), Some(_)) => Err(CallGraphError::AmbiguousSpecialization {
            callable: callable.name.to_string(),
            kind: kind.to_string(),
            count: 2 + matching.count(),
        }),
    }
}

/// The substitution a caller's own type arguments establish.
fn caller_resolutions(
    callable: &Callable,
    type_arguments: Option<&[ResolvedType]>,
) -> Result<TypeParameterResolutions, CallGraphError> {
    let Some(type_arguments) = type_arguments else {
        return Ok(TypeParameterResolutions::new());
    };
    if type_arguments.len() != callable.type_parameters.len() {
        return Err(CallGraphError::TypeArgumentArityMismatch {
            callable: callable.name.to_string(),
            expected: callable.type_parameters.len(),
            found: type_arguments.len(),
        });
    }
    Ok(callable
        .type_parameter_keys()
        .zip(type_arguments.iter().cloned())
        .collect())
}

/// Index callables by name for lookups during a run.
fn index_callables(program: &Program) -> GlobalIndex<'_> {
    program
        .callables()
        .map(|callable| (&callable.name, callable))
        .collect()
}
