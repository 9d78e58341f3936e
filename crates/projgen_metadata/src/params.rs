//! Formal generic parameters and the entities that declare them.

use std::fmt;

use crate::semantics::TypeName;

/// Handle to one generic parameter declaration (e.g. `T` in `Map<T>`).
///
/// Two handles are equal when they name the same ordinal of the same declaring entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormalParameter {
    owner: TypeName,
    name: String,
    ordinal: usize,
}

impl FormalParameter {
    pub fn new(owner: TypeName, name: impl Into<String>, ordinal: usize) -> Self {
        Self {
            owner,
            name: name.into(),
            ordinal,
        }
    }

    /// The entity that declares this parameter.
    pub fn owner(&self) -> &TypeName {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Zero-based position in the owner's parameter list.
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

impl fmt::Display for FormalParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A type or member that declares generic parameters.
///
/// ## Notes
/// - Parameters are numbered in declaration order starting at zero.
/// - A declaration with no parameters is valid; its range is simply empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenericDeclaration {
    name: TypeName,
    params: Vec<FormalParameter>,
}

impl GenericDeclaration {
    /// Declare `name` with the given parameter names, in order.
    pub fn new<S: AsRef<str>>(name: TypeName, param_names: &[S]) -> Self {
        let params = param_names
            .iter()
            .enumerate()
            .map(|(ordinal, param)| FormalParameter::new(name.clone(), param.as_ref(), ordinal))
            .collect();
        Self { name, params }
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// The ordered formal parameter range of this declaration.
    pub fn generic_params(&self) -> &[FormalParameter] {
        &self.params
    }
}
