//! Define error types for generic scope queries.
//!
//! Every variant is a caller contract violation inside one emission pass: the driver queried a scope it
//! never pushed, indexed past a frame, or pushed an instantiation with no arguments. None of them are
//! retried; the driver abandons the entity being emitted.

use miette::Diagnostic;
use thiserror::Error;

/// Error raised by the generic parameter/argument stacks.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum GenericsError {
    /// A by-index query with no frame on the stack.
    #[error("no generic {what} scope is active")]
    #[diagnostic(
        code(projgen::generics::out_of_scope),
        help("push the declaring entity's generic scope before emitting text that refers to it")
    )]
    OutOfScope { what: ScopeKind },

    /// An index past the end of the frame it was resolved against.
    ///
    /// `depth` counts frames from the innermost (0) outward.
    #[error("generic {what} index {index} is out of range for a frame of {len} (frame depth {depth})")]
    #[diagnostic(code(projgen::generics::index_out_of_range))]
    IndexOutOfRange {
        what: ScopeKind,
        index: usize,
        len: usize,
        depth: usize,
    },

    #[error("invalid argument: {0}")]
    #[diagnostic(code(projgen::generics::invalid_argument))]
    InvalidArgument(String),
}

/// Which of the two stacks an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Parameter,
    Argument,
}

impl std::fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScopeKind::Parameter => write!(f, "parameter"),
            ScopeKind::Argument => write!(f, "argument"),
        }
    }
}
