//! Call graph construction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a call graph construction run.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CallGraphConfig {
    /// Dotted qualified names of the entry points (`Namespace.Callable`).
    /// Empty selects exhaustive mode.
    pub entry_points: Vec<String>,
    /// Abort construction when the graph would hold more nodes than this.
    pub max_nodes: Option<usize>,
    /// Emit a trace-level event for every recorded edge. Default: false.
    pub trace_edges: Option<bool>,
}

impl CallGraphConfig {
    /// True when no entry points are configured.
    pub fn is_exhaustive(&self) -> bool {
        self.entry_points.is_empty()
    }

    /// Returns the effective edge tracing flag, defaulting to false.
    pub fn effective_trace_edges(&self) -> bool {
        self.trace_edges.unwrap_or(false)
    }
}
