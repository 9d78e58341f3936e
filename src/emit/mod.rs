//! Text emission substrate for the generator.
//!
//! [`Writer`] tracks indentation and owns the generic scope stacks for one emission pass. The generic
//! scope API itself lives in [`crate::generics`]; type-reference rendering lives in `semantics`.

mod config;
mod semantics;
mod separator;
mod writer;

pub use config::WriterConfig;
pub use separator::Separator;
pub use writer::{CODE_ESCAPE, Writer};
