//! Type parameter resolution: the per-subtree stack of substitutions and
//! the contract that combines them into one.

use callgraph_core::errors::CallGraphError;
use callgraph_core::types::collections::SmallVec4;

use crate::program::TypeParameterResolutions;

/// Combines an ordered list of substitutions into one.
///
/// `ordered` lists the innermost substitution first and the current
/// caller's substitution last. Implementations fail when the maps
/// contradict each other.
pub trait ResolutionCombiner {
    fn combine(
        &self,
        ordered: &[&TypeParameterResolutions],
    ) -> Result<TypeParameterResolutions, CallGraphError>;
}

/// Default combination.
///
/// Maps are folded innermost first. Each outer map is substituted into the
/// values collected so far, then contributes its own bindings. A parameter
/// bound to two different types is a conflict, unless one of them is the
/// parameter itself (an identity binding from a recursive reference).
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeResolutionCombination;

impl ResolutionCombiner for TypeResolutionCombination {
    fn combine(
        &self,
        ordered: &[&TypeParameterResolutions],
    ) -> Result<TypeParameterResolutions, CallGraphError> {
        let mut combined = TypeParameterResolutions::new();

        for map in ordered {
            if map.is_empty() {
                continue;
            }
            for value in combined.values_mut() {
                *value = value.substitute(map);
            }
            for (param, resolved) in map.iter() {
                match combined.get(param) {
                    None => {
                        combined.insert(param.clone(), resolved.clone());
                    }
                    Some(existing) if existing == resolved || resolved.is_type_parameter(param) => {}
                    Some(existing) if existing.is_type_parameter(param) => {
                        combined.insert(param.clone(), resolved.clone());
                    }
                    Some(existing) => {
                        return Err(CallGraphError::ResolutionConflict {
                            parameter: param.to_string(),
                            first: existing.to_string(),
                            second: resolved.to_string(),
                        });
                    }
                }
            }
        }

        for (param, resolved) in &combined {
            if !resolved.is_type_parameter(param) && resolved.contains_type_parameter(param) {
                return Err(CallGraphError::SelfReferentialResolution {
                    parameter: param.to_string(),
                    resolved: resolved.to_string(),
                });
            }
        }

        Ok(combined)
    }
}

/// Substitutions gathered from generic instantiation expressions entered
/// since the last reference to a global callable.
#[derive(Debug, Default)]
pub struct ResolutionStack<'ast> {
    /// In entry order; combination reads them most recent first.
    maps: SmallVec4<&'ast TypeParameterResolutions>,
}

impl<'ast> ResolutionStack<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the substitution of an entered expression. Empty maps carry
    /// no information and are skipped.
    pub fn push(&mut self, resolutions: &'ast TypeParameterResolutions) {
        if !resolutions.is_empty() {
            self.maps.push(resolutions);
        }
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Drop everything pushed after the stack had `len` entries.
    pub fn truncate(&mut self, len: usize) {
        self.maps.truncate(len);
    }

    pub fn clear(&mut self) {
        self.maps.clear();
    }

    /// The list handed to the combiner: most recently entered first, then
    /// the caller's own substitution.
    pub fn ordered<'a>(
        &'a self,
        caller: &'a TypeParameterResolutions,
    ) -> Vec<&'a TypeParameterResolutions> {
        let mut ordered: Vec<&'a TypeParameterResolutions> = Vec::with_capacity(self.maps.len() + 1);
        for map in self.maps.iter().rev() {
            ordered.push(*map);
        }
        ordered.push(caller);
        ordered
    }

    /// Combine and consume the gathered substitutions.
    pub fn consume(
        &mut self,
        caller: &TypeParameterResolutions,
        combiner: &dyn ResolutionCombiner,
    ) -> Result<TypeParameterResolutions, CallGraphError> {
        let result = combiner.combine(&self.ordered(caller));
        self.maps.clear();
        result
    }
}
