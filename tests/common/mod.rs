//! Shared helpers for integration tests.

#![allow(dead_code)]

use projgen::metadata::{FundamentalType, GenericDeclaration, GenericTypeInstance, TypeName, TypeSemantics};

/// Initialize structured logging once per test binary, defaulting to info.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

pub fn declare(name: &str, params: &[&str]) -> GenericDeclaration {
    GenericDeclaration::new(TypeName::new("Demo", name), params)
}

pub fn bind(decl: &GenericDeclaration, args: Vec<TypeSemantics>) -> GenericTypeInstance {
    GenericTypeInstance::new(decl.name().clone(), args)
}

pub fn int32() -> TypeSemantics {
    FundamentalType::Int32.into()
}

pub fn string() -> TypeSemantics {
    FundamentalType::String.into()
}
