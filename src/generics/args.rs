//! Stack of generic argument frames and the indirection-following resolver.
//!
//! Each frame holds the arguments of one instantiation being emitted. An argument may itself be a
//! `GenericParameterReference(j)`, meaning "whatever the next enclosing instantiation binds at `j`";
//! [`GenericArgStack::get`] chases those references outward one frame at a time.

use projgen_metadata::{GenericTypeInstance, TypeSemantics};

use super::errors::{GenericsError, ScopeKind};

/// Per-nesting-level generic arguments, outermost first.
#[derive(Debug, Default)]
pub struct GenericArgStack {
    stack: Vec<Vec<TypeSemantics>>,
}

impl GenericArgStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the instantiation's argument list into a new top frame.
    ///
    /// ## Errors
    /// - [`GenericsError::InvalidArgument`] if the instantiation has no arguments; nothing is pushed.
    pub(crate) fn push(&mut self, instance: &GenericTypeInstance) -> Result<(), GenericsError> {
        if instance.generic_args.is_empty() {
            tracing::warn!(generic_type = %instance.generic_type, "rejected generic instantiation with no arguments");
            return Err(GenericsError::InvalidArgument(format!(
                "generic instantiation of `{}` has no arguments",
                instance.generic_type
            )));
        }
        self.stack.push(instance.generic_args.clone());
        tracing::trace!(depth = self.stack.len(), generic_type = %instance.generic_type, "pushed generic argument frame");
        Ok(())
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop();
        tracing::trace!(depth = self.stack.len(), "popped generic argument frame");
    }

    /// Resolve argument `index` of the innermost instantiation.
    ///
    /// Parameter references are re-indexed against the next frame outward until a concrete value is
    /// found. The walk visits each frame at most once, so it always terminates.
    ///
    /// ## Returns
    /// - The first non-reference value found, or the last reference seen if every frame was consumed.
    ///   An unresolved reference is a valid result: the parameter is still generic in this context.
    ///
    /// ## Errors
    /// - [`GenericsError::OutOfScope`] if no frame is pushed.
    /// - [`GenericsError::IndexOutOfRange`] if the (possibly re-indexed) lookup exceeds a frame.
    pub fn get(&self, index: usize) -> Result<&TypeSemantics, GenericsError> {
        self.resolve(index, 0).map(|(semantics, _)| semantics)
    }

    /// Resolve `index` starting `skip` frames out from the innermost one.
    ///
    /// ## Returns
    /// - The resolved value and the depth of the frame it was read from (innermost is 0). Parameter
    ///   references nested inside that value are relative to the frames beyond `depth`.
    ///
    /// ## Errors
    /// - [`GenericsError::OutOfScope`] if fewer than `skip + 1` frames are pushed.
    /// - [`GenericsError::IndexOutOfRange`] as for [`GenericArgStack::get`].
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve(&self, index: usize, skip: usize) -> Result<(&TypeSemantics, usize), GenericsError> {
        if skip >= self.stack.len() {
            return Err(GenericsError::OutOfScope {
                what: ScopeKind::Argument,
            });
        }

        let mut index = index;
        let mut semantics = None;
        for (depth, frame) in self.stack.iter().rev().enumerate().skip(skip) {
            let value = frame.get(index).ok_or(GenericsError::IndexOutOfRange {
                what: ScopeKind::Argument,
                index,
                len: frame.len(),
                depth,
            })?;
            match value {
                TypeSemantics::GenericParameterReference(gti) => {
                    tracing::debug!(depth, from = index, to = gti.index, "following generic parameter reference");
                    index = gti.index;
                    semantics = Some(value);
                }
                _ => return Ok((value, depth)),
            }
        }

        // Every frame held a reference; the parameter is still open here.
        let unresolved = semantics.ok_or(GenericsError::OutOfScope {
            what: ScopeKind::Argument,
        })?;
        tracing::debug!(%unresolved, "generic argument remains unresolved");
        Ok((unresolved, self.stack.len() - 1))
    }

    /// Number of frames currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
