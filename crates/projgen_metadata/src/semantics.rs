//! Type references as the metadata reader resolves them.
//!
//! [`TypeSemantics`] is a closed set: the generator core matches on it exhaustively, so adding a case
//! here is a breaking change for every handler in the generator.

use std::fmt;

use crate::params::FormalParameter;

/// Namespace-qualified type name as stored in metadata.
///
/// Generic type names keep their metadata arity suffix (e.g. ``Pair`2``); writers strip it on output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    pub namespace: String,
    pub name: String,
}

impl TypeName {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

/// Element types with a dedicated metadata encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FundamentalType {
    Boolean,
    Char,
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
}

impl FundamentalType {
    /// Canonical metadata spelling.
    pub fn metadata_name(self) -> &'static str {
        match self {
            FundamentalType::Boolean => "Boolean",
            FundamentalType::Char => "Char16",
            FundamentalType::Int8 => "Int8",
            FundamentalType::UInt8 => "UInt8",
            FundamentalType::Int16 => "Int16",
            FundamentalType::UInt16 => "UInt16",
            FundamentalType::Int32 => "Int32",
            FundamentalType::UInt32 => "UInt32",
            FundamentalType::Int64 => "Int64",
            FundamentalType::UInt64 => "UInt64",
            FundamentalType::Float => "Single",
            FundamentalType::Double => "Double",
            FundamentalType::String => "String",
        }
    }
}

/// "The Nth formal parameter of the enclosing generic scope."
///
/// Metadata writes `!N` for these; the index is relative to whichever instantiation encloses the
/// reference, not to any particular declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenericTypeIndex {
    pub index: usize,
}

/// A generic type bound to an argument list, e.g. `Pair<Int32, String>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GenericTypeInstance {
    pub generic_type: TypeName,
    pub generic_args: Vec<TypeSemantics>,
}

impl GenericTypeInstance {
    pub fn new(generic_type: TypeName, generic_args: Vec<TypeSemantics>) -> Self {
        Self {
            generic_type,
            generic_args,
        }
    }
}

impl fmt::Display for GenericTypeInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<", self.generic_type)?;
        for (i, arg) in self.generic_args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(">")
    }
}

/// The shapes a type reference can take once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSemantics {
    Fundamental(FundamentalType),
    /// The root object type.
    Object,
    Guid,
    /// The runtime type-handle type.
    SystemType,
    /// A non-generic (or open generic) type definition.
    Definition(TypeName),
    GenericInstance(GenericTypeInstance),
    /// Positional reference into the enclosing instantiation's arguments.
    GenericParameterReference(GenericTypeIndex),
    /// A formal parameter that is still unbound.
    GenericParameter(FormalParameter),
}

impl TypeSemantics {
    /// Shorthand for `GenericParameterReference(GenericTypeIndex { index })`.
    pub fn param_ref(index: usize) -> Self {
        TypeSemantics::GenericParameterReference(GenericTypeIndex { index })
    }

    pub fn is_param_ref(&self) -> bool {
        matches!(self, TypeSemantics::GenericParameterReference(_))
    }
}

impl From<FundamentalType> for TypeSemantics {
    fn from(value: FundamentalType) -> Self {
        TypeSemantics::Fundamental(value)
    }
}

impl From<GenericTypeInstance> for TypeSemantics {
    fn from(value: GenericTypeInstance) -> Self {
        TypeSemantics::GenericInstance(value)
    }
}

impl fmt::Display for TypeSemantics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSemantics::Fundamental(t) => f.write_str(t.metadata_name()),
            TypeSemantics::Object => f.write_str("Object"),
            TypeSemantics::Guid => f.write_str("Guid"),
            TypeSemantics::SystemType => f.write_str("Type"),
            TypeSemantics::Definition(name) => write!(f, "{name}"),
            TypeSemantics::GenericInstance(instance) => write!(f, "{instance}"),
            TypeSemantics::GenericParameterReference(gti) => write!(f, "!{}", gti.index),
            TypeSemantics::GenericParameter(param) => write!(f, "{param}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Display tests
    // ========================================

    #[test]
    fn test_display_fundamental() {
        assert_eq!(TypeSemantics::from(FundamentalType::Int32).to_string(), "Int32");
        assert_eq!(TypeSemantics::from(FundamentalType::Float).to_string(), "Single");
    }

    #[test]
    fn test_display_type_name_without_namespace() {
        assert_eq!(TypeName::new("", "Widget").to_string(), "Widget");
        assert_eq!(TypeName::new("Demo.Ui", "Widget").to_string(), "Demo.Ui.Widget");
    }

    #[test]
    fn test_display_generic_instance() {
        let instance = GenericTypeInstance::new(
            TypeName::new("Demo", "Pair`2"),
            vec![FundamentalType::Int32.into(), TypeSemantics::param_ref(1)],
        );
        assert_eq!(instance.to_string(), "Demo.Pair`2<Int32, !1>");
    }

    #[test]
    fn test_display_nested_instance() {
        let inner = GenericTypeInstance::new(TypeName::new("Demo", "Box`1"), vec![TypeSemantics::Guid]);
        let outer = GenericTypeInstance::new(TypeName::new("Demo", "Box`1"), vec![inner.into()]);
        assert_eq!(outer.to_string(), "Demo.Box`1<Demo.Box`1<Guid>>");
    }

    // ========================================
    // Helper tests
    // ========================================

    #[test]
    fn test_param_ref_helper() {
        let semantics = TypeSemantics::param_ref(3);
        assert!(semantics.is_param_ref());
        assert_eq!(
            semantics,
            TypeSemantics::GenericParameterReference(GenericTypeIndex { index: 3 })
        );
        assert!(!TypeSemantics::Object.is_param_ref());
    }
}
