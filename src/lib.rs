#![forbid(unsafe_code)]
//! Generic-context resolution core for a metadata-driven projection source generator.
//!
//! While the generator writes text for a type or member declared in terms of formal generic parameters,
//! this crate resolves each parameter reference to its concrete (or still-generic) argument, across
//! arbitrarily nested instantiations. Metadata loading, member enumeration and the text templates for
//! specific constructs belong to the caller.
//!
//! ```
//! use projgen::emit::{Writer, WriterConfig};
//! use projgen::metadata::{FundamentalType, GenericDeclaration, GenericTypeInstance, TypeName, TypeSemantics};
//!
//! let pair = GenericDeclaration::new(TypeName::new("Demo", "Pair`2"), &["K", "V"]);
//! let bound = GenericTypeInstance::new(
//!     pair.name().clone(),
//!     vec![FundamentalType::Int32.into(), FundamentalType::String.into()],
//! );
//!
//! let mut w = Writer::new(WriterConfig::default());
//! {
//!     let mut params = w.push_generic_params(pair.generic_params());
//!     let args = params.push_generic_args(&bound)?;
//!     assert_eq!(args.get_generic_arg(1)?, &TypeSemantics::from(FundamentalType::String));
//! }
//! assert!(w.generic_params().is_empty() && w.generic_args().is_empty());
//! # Ok::<(), projgen::GenericsError>(())
//! ```
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?`. Scope queries report contract violations as
//!   [`GenericsError`]; the driver abandons the entity being emitted.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod dispatch;
pub mod emit;
pub mod generics;

pub use projgen_metadata as metadata;

pub use dispatch::{SemanticsHandler, SemanticsKind, dispatch};
pub use emit::{Separator, Writer, WriterConfig};
pub use generics::{GenericArgsGuard, GenericParamsGuard, GenericsError};

/// Result of a generic scope query.
pub type Result<T, E = GenericsError> = std::result::Result<T, E>;
