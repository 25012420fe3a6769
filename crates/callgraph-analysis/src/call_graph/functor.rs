//! Functor state active while descending into an expression tree.

use crate::program::SpecializationKind;

/// Context threaded through the walk by value. Every transition returns a
/// new context, so leaving a subexpression restores the enclosing state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FunctorContext {
    /// True only in the operator position of a call.
    pub is_direct_call_target: bool,
    pub adjoint_active: bool,
    pub controlled_active: bool,
}

impl FunctorContext {
    /// Context for the callee of a call expression.
    pub fn call_target(self) -> Self {
        Self {
            is_direct_call_target: true,
            ..self
        }
    }

    /// Context for a subexpression whose value is used, not called.
    pub fn value_position(self) -> Self {
        Self {
            is_direct_call_target: false,
            ..self
        }
    }

    /// Entering an adjoint application flips the flag; adjoint of adjoint
    /// is the identity.
    pub fn adjoint(self) -> Self {
        Self {
            adjoint_active: !self.adjoint_active,
            ..self
        }
    }

    /// Controlled applications compose into a single controlled state.
    pub fn controlled(self) -> Self {
        Self {
            controlled_active: true,
            ..self
        }
    }

    /// The specialization a direct call reaches under this context.
    pub fn specialization_kind(self) -> SpecializationKind {
        SpecializationKind::from_functors(self.adjoint_active, self.controlled_active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_body_value_position() {
        let ctx = FunctorContext::default();
        assert!(!ctx.is_direct_call_target);
        assert_eq!(ctx.specialization_kind(), SpecializationKind::Body);
    }

    #[test]
    fn test_adjoint_toggles() {
        let ctx = FunctorContext::default().adjoint();
        assert_eq!(ctx.specialization_kind(), SpecializationKind::Adjoint);
        assert_eq!(ctx.adjoint().specialization_kind(), SpecializationKind::Body);
    }

    #[test]
    fn test_controlled_is_idempotent() {
        let once = FunctorContext::default().controlled();
        let twice = once.controlled();
        assert_eq!(once, twice);
        assert_eq!(twice.specialization_kind(), SpecializationKind::Controlled);
    }

    #[test]
    fn test_all_four_variants() {
        let base = FunctorContext::default();
        assert_eq!(base.specialization_kind(), SpecializationKind::Body);
        assert_eq!(base.adjoint().specialization_kind(), SpecializationKind::Adjoint);
        assert_eq!(base.controlled().specialization_kind(), SpecializationKind::Controlled);
        assert_eq!(
            base.controlled().adjoint().specialization_kind(),
            SpecializationKind::ControlledAdjoint
        );
    }

    #[test]
    fn test_call_target_keeps_functors() {
        let ctx = FunctorContext::default().adjoint().controlled().call_target();
        assert!(ctx.is_direct_call_target);
        assert_eq!(ctx.specialization_kind(), SpecializationKind::ControlledAdjoint);
        let value = ctx.value_position();
        assert!(!value.is_direct_call_target);
        assert_eq!(value.specialization_kind(), SpecializationKind::ControlledAdjoint);
    }
}
