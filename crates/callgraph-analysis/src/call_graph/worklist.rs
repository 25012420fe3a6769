//! Pending queue and resolved set for demand-driven construction.

use callgraph_core::types::collections::FxHashSet;

use super::types::CallGraphNode;

/// LIFO worklist keyed by node identity.
///
/// A node is processed at most once: it is only accepted while neither
/// pending nor resolved, and it is marked resolved as it is popped.
/// An inactive worklist (exhaustive mode) accepts nothing.
#[derive(Debug)]
pub struct Worklist {
    active: bool,
    pending: Vec<CallGraphNode>,
    pending_set: FxHashSet<CallGraphNode>,
    resolved: FxHashSet<CallGraphNode>,
}

impl Worklist {
    /// A worklist that accepts nodes (demand-driven mode).
    pub fn demand_driven() -> Self {
        Self {
            active: true,
            pending: Vec::new(),
            pending_set: FxHashSet::default(),
            resolved: FxHashSet::default(),
        }
    }

    /// A worklist that ignores every offer (exhaustive mode).
    pub fn inactive() -> Self {
        Self {
            active: false,
            ..Self::demand_driven()
        }
    }

    /// Enqueue `node` unless it is already pending or resolved.
    /// Returns true if it was enqueued.
    pub fn offer(&mut self, node: &CallGraphNode) -> bool {
        if !self.active || self.resolved.contains(node) || self.pending_set.contains(node) {
            return false;
        }
        self.pending_set.insert(node.clone());
        self.pending.push(node.clone());
        true
    }

    /// Pop the most recently enqueued node and mark it resolved.
    pub fn pop(&mut self) -> Option<CallGraphNode> {
        let node = self.pending.pop()?;
        self.pending_set.remove(&node);
        self.resolved.insert(node.clone());
        Some(node)
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
