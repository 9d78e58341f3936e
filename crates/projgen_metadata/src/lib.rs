//! Provide the type-representation vocabulary the projgen core consumes from the metadata reader.
//!
//! This crate is intentionally small and dependency-free. It models the handles that the external
//! type-resolution component hands to the generator while it writes text:
//! - formal generic parameters, identified by their declaring entity and ordinal position, and
//! - [`TypeSemantics`], the closed set of shapes a type reference can take.
//!
//! ## Notes
//!
//! - Everything here is immutable once constructed; the generator core only clones and compares.
//! - No IO and no global state.

pub mod params;
pub mod semantics;

pub use params::{FormalParameter, GenericDeclaration};
pub use semantics::{FundamentalType, GenericTypeIndex, GenericTypeInstance, TypeName, TypeSemantics};
