//! Generic parameter and argument scopes for the writer.
//!
//! While the generator emits a type or member it pushes the entity's formal parameters and, when it is
//! emitting a bound instantiation, the instantiation's arguments. Queries by index then resolve against
//! those frames. Frames are released by guards, never by explicit pops.
//!
//! ## See also
//! - [`params`]: innermost-only formal parameter lookup
//! - [`args`]: indirection-following argument resolution
//! - [`guard`]: scope guards

mod args;
mod errors;
mod guard;
mod params;

pub use args::GenericArgStack;
pub use errors::{GenericsError, ScopeKind};
pub use guard::{GenericArgsGuard, GenericParamsGuard};
pub use params::GenericParamStack;

use projgen_metadata::{FormalParameter, GenericTypeInstance, TypeSemantics};

use crate::emit::Writer;

impl Writer {
    /// Push the formal parameters declared by the entity about to be emitted.
    ///
    /// An empty range pushes nothing and returns an inert guard, so callers can push unconditionally.
    pub fn push_generic_params<'a, I>(&mut self, range: I) -> GenericParamsGuard<'_>
    where
        I: IntoIterator<Item = &'a FormalParameter>,
    {
        let pushed = self.generic_params.push(range);
        GenericParamsGuard::new(self, pushed)
    }

    /// The formal parameter at `index` of the entity currently being emitted.
    pub fn get_generic_param(&self, index: usize) -> Result<&FormalParameter, GenericsError> {
        self.generic_params.get(index)
    }

    /// Push the arguments of the instantiation about to be emitted.
    ///
    /// ## Errors
    /// - [`GenericsError::InvalidArgument`] if `instance` has no arguments.
    pub fn push_generic_args(&mut self, instance: &GenericTypeInstance) -> Result<GenericArgsGuard<'_>, GenericsError> {
        self.generic_args.push(instance)?;
        Ok(GenericArgsGuard::new(self))
    }

    /// Resolve argument `index` through the active instantiations (see [`GenericArgStack::get`]).
    pub fn get_generic_arg(&self, index: usize) -> Result<&TypeSemantics, GenericsError> {
        self.generic_args.get(index)
    }

    /// Run `f` with `range` pushed as the innermost parameter frame.
    pub fn with_generic_params<'a, I, R>(&mut self, range: I, f: impl FnOnce(&mut Writer) -> R) -> R
    where
        I: IntoIterator<Item = &'a FormalParameter>,
    {
        let mut guard = self.push_generic_params(range);
        f(&mut guard)
    }

    /// Run `f` with `instance`'s arguments pushed as the innermost argument frame.
    pub fn with_generic_args<R>(
        &mut self,
        instance: &GenericTypeInstance,
        f: impl FnOnce(&mut Writer) -> R,
    ) -> Result<R, GenericsError> {
        let mut guard = self.push_generic_args(instance)?;
        Ok(f(&mut guard))
    }

    /// The formal parameter frames pushed so far.
    pub fn generic_params(&self) -> &GenericParamStack {
        &self.generic_params
    }

    /// The generic argument frames pushed so far.
    pub fn generic_args(&self) -> &GenericArgStack {
        &self.generic_args
    }
}
