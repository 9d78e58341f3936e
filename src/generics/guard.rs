//! Scope guards that pop a generic frame when they go out of scope.
//!
//! A guard mutably borrows the [`Writer`] for as long as it lives and dereferences to it, so text for
//! the nested entity is written *through* the innermost guard. The borrow checker therefore rules out
//! popping anything but the most recently pushed frame: an outer guard cannot be dropped or used
//! while an inner one still borrows it.
//!
//! Guards are move-only. Moving one transfers the pop obligation; the compiler forbids using the
//! moved-from binding, so a frame is never popped twice.

use std::ops::{Deref, DerefMut};

use crate::emit::Writer;

/// Pops one generic parameter frame on drop.
///
/// An inert guard (returned when the declaring entity has no parameters) holds no obligation and
/// dropping it does nothing.
#[must_use = "dropping the guard immediately pops the generic parameter frame"]
pub struct GenericParamsGuard<'w> {
    writer: &'w mut Writer,
    active: bool,
}

impl<'w> GenericParamsGuard<'w> {
    pub(crate) fn new(writer: &'w mut Writer, active: bool) -> Self {
        Self { writer, active }
    }

    /// Whether this guard still owes a pop.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pop the frame now instead of at end of scope.
    pub fn release(mut self) {
        self.pop_once();
    }

    fn pop_once(&mut self) {
        if std::mem::take(&mut self.active) {
            self.writer.generic_params.pop();
        }
    }
}

impl Drop for GenericParamsGuard<'_> {
    fn drop(&mut self) {
        self.pop_once();
    }
}

impl Deref for GenericParamsGuard<'_> {
    type Target = Writer;

    fn deref(&self) -> &Writer {
        &*self.writer
    }
}

impl DerefMut for GenericParamsGuard<'_> {
    fn deref_mut(&mut self) -> &mut Writer {
        &mut *self.writer
    }
}

/// Pops one generic argument frame on drop and restores the writer's `in_generic_instance` flag.
#[must_use = "dropping the guard immediately pops the generic argument frame"]
pub struct GenericArgsGuard<'w> {
    writer: &'w mut Writer,
    active: bool,
    /// Flag value to restore on release.
    was_in_generic_instance: bool,
}

impl<'w> GenericArgsGuard<'w> {
    /// Wrap a frame that was just pushed, marking the writer as inside a generic instance.
    pub(crate) fn new(writer: &'w mut Writer) -> Self {
        let was_in_generic_instance = std::mem::replace(&mut writer.in_generic_instance, true);
        Self {
            writer,
            active: true,
            was_in_generic_instance,
        }
    }

    /// Whether this guard still owes a pop.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pop the frame now instead of at end of scope.
    pub fn release(mut self) {
        self.pop_once();
    }

    fn pop_once(&mut self) {
        if std::mem::take(&mut self.active) {
            self.writer.generic_args.pop();
            self.writer.in_generic_instance = self.was_in_generic_instance;
        }
    }
}

impl Drop for GenericArgsGuard<'_> {
    fn drop(&mut self) {
        self.pop_once();
    }
}

impl Deref for GenericArgsGuard<'_> {
    type Target = Writer;

    fn deref(&self) -> &Writer {
        &*self.writer
    }
}

impl DerefMut for GenericArgsGuard<'_> {
    fn deref_mut(&mut self) -> &mut Writer {
        &mut *self.writer
    }
}
