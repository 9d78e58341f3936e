//! Stack of formal generic parameter frames.
//!
//! Parameter names are local to their declaring entity, so lookups only ever consult the innermost
//! frame. An outer entity's parameters become visible again once the nested frame is popped.

use projgen_metadata::FormalParameter;

use super::errors::{GenericsError, ScopeKind};

/// Per-nesting-level formal parameters, outermost first.
#[derive(Debug, Default)]
pub struct GenericParamStack {
    stack: Vec<Vec<FormalParameter>>,
}

impl GenericParamStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy `range` into a new top frame.
    ///
    /// ## Returns
    /// - `true` if a frame was pushed, `false` if `range` was empty (nothing to pop later).
    pub(crate) fn push<'a, I>(&mut self, range: I) -> bool
    where
        I: IntoIterator<Item = &'a FormalParameter>,
    {
        let params: Vec<FormalParameter> = range.into_iter().cloned().collect();
        if params.is_empty() {
            tracing::trace!("skipping empty generic parameter frame");
            return false;
        }
        self.stack.push(params);
        tracing::trace!(depth = self.stack.len(), "pushed generic parameter frame");
        true
    }

    pub(crate) fn pop(&mut self) {
        self.stack.pop();
        tracing::trace!(depth = self.stack.len(), "popped generic parameter frame");
    }

    /// The parameter at `index` in the innermost frame.
    pub fn get(&self, index: usize) -> Result<&FormalParameter, GenericsError> {
        let frame = self.stack.last().ok_or(GenericsError::OutOfScope {
            what: ScopeKind::Parameter,
        })?;
        frame.get(index).ok_or(GenericsError::IndexOutOfRange {
            what: ScopeKind::Parameter,
            index,
            len: frame.len(),
            depth: 0,
        })
    }

    /// Number of frames currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
