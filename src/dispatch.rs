//! Static dispatch over [`TypeSemantics`] cases.
//!
//! A [`SemanticsHandler`] supplies one method per case. Every method is required, so a handler that
//! forgets a case fails to compile rather than falling through at runtime.

use projgen_metadata::{FormalParameter, FundamentalType, GenericTypeIndex, GenericTypeInstance, TypeName, TypeSemantics};

/// One handler per [`TypeSemantics`] case.
pub trait SemanticsHandler {
    type Output;

    fn fundamental(&mut self, ty: FundamentalType) -> Self::Output;
    fn object(&mut self) -> Self::Output;
    fn guid(&mut self) -> Self::Output;
    fn system_type(&mut self) -> Self::Output;
    fn definition(&mut self, name: &TypeName) -> Self::Output;
    fn generic_instance(&mut self, instance: &GenericTypeInstance) -> Self::Output;
    fn param_ref(&mut self, index: GenericTypeIndex) -> Self::Output;
    fn generic_param(&mut self, param: &FormalParameter) -> Self::Output;
}

/// Invoke the handler method matching the active case of `semantics`.
pub fn dispatch<H: SemanticsHandler + ?Sized>(semantics: &TypeSemantics, handler: &mut H) -> H::Output {
    match semantics {
        TypeSemantics::Fundamental(ty) => handler.fundamental(*ty),
        TypeSemantics::Object => handler.object(),
        TypeSemantics::Guid => handler.guid(),
        TypeSemantics::SystemType => handler.system_type(),
        TypeSemantics::Definition(name) => handler.definition(name),
        TypeSemantics::GenericInstance(instance) => handler.generic_instance(instance),
        TypeSemantics::GenericParameterReference(gti) => handler.param_ref(*gti),
        TypeSemantics::GenericParameter(param) => handler.generic_param(param),
    }
}

/// Payload-free discriminant of a [`TypeSemantics`], for logging and quick classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticsKind {
    Fundamental,
    Object,
    Guid,
    SystemType,
    Definition,
    GenericInstance,
    GenericParameterReference,
    GenericParameter,
}

struct KindOf;

impl SemanticsHandler for KindOf {
    type Output = SemanticsKind;

    fn fundamental(&mut self, _: FundamentalType) -> SemanticsKind {
        SemanticsKind::Fundamental
    }
    fn object(&mut self) -> SemanticsKind {
        SemanticsKind::Object
    }
    fn guid(&mut self) -> SemanticsKind {
        SemanticsKind::Guid
    }
    fn system_type(&mut self) -> SemanticsKind {
        SemanticsKind::SystemType
    }
    fn definition(&mut self, _: &TypeName) -> SemanticsKind {
        SemanticsKind::Definition
    }
    fn generic_instance(&mut self, _: &GenericTypeInstance) -> SemanticsKind {
        SemanticsKind::GenericInstance
    }
    fn param_ref(&mut self, _: GenericTypeIndex) -> SemanticsKind {
        SemanticsKind::GenericParameterReference
    }
    fn generic_param(&mut self, _: &FormalParameter) -> SemanticsKind {
        SemanticsKind::GenericParameter
    }
}

impl SemanticsKind {
    pub fn of(semantics: &TypeSemantics) -> Self {
        dispatch(semantics, &mut KindOf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts nested generic arguments, recursing through instances.
    struct ArgCounter;

    impl SemanticsHandler for ArgCounter {
        type Output = usize;

        fn fundamental(&mut self, _: FundamentalType) -> usize {
            0
        }
        fn object(&mut self) -> usize {
            0
        }
        fn guid(&mut self) -> usize {
            0
        }
        fn system_type(&mut self) -> usize {
            0
        }
        fn definition(&mut self, _: &TypeName) -> usize {
            0
        }
        fn generic_instance(&mut self, instance: &GenericTypeInstance) -> usize {
            instance
                .generic_args
                .iter()
                .map(|arg| 1 + dispatch(arg, self))
                .sum()
        }
        fn param_ref(&mut self, _: GenericTypeIndex) -> usize {
            0
        }
        fn generic_param(&mut self, _: &FormalParameter) -> usize {
            0
        }
    }

    #[test]
    fn test_kind_of_each_case() {
        let name = TypeName::new("Demo", "Widget");
        let param = FormalParameter::new(name.clone(), "T", 0);
        let instance = GenericTypeInstance::new(name.clone(), vec![TypeSemantics::Object]);
        let cases = [
            (TypeSemantics::Fundamental(FundamentalType::Int32), SemanticsKind::Fundamental),
            (TypeSemantics::Object, SemanticsKind::Object),
            (TypeSemantics::Guid, SemanticsKind::Guid),
            (TypeSemantics::SystemType, SemanticsKind::SystemType),
            (TypeSemantics::Definition(name), SemanticsKind::Definition),
            (TypeSemantics::GenericInstance(instance), SemanticsKind::GenericInstance),
            (TypeSemantics::param_ref(0), SemanticsKind::GenericParameterReference),
            (TypeSemantics::GenericParameter(param), SemanticsKind::GenericParameter),
        ];
        for (semantics, kind) in cases {
            assert_eq!(SemanticsKind::of(&semantics), kind, "{semantics}");
        }
    }

    #[test]
    fn test_handler_can_recurse() {
        let inner = GenericTypeInstance::new(
            TypeName::new("Demo", "Pair`2"),
            vec![TypeSemantics::Guid, TypeSemantics::param_ref(0)],
        );
        let outer = TypeSemantics::GenericInstance(GenericTypeInstance::new(
            TypeName::new("Demo", "Box`1"),
            vec![inner.into()],
        ));
        assert_eq!(dispatch(&outer, &mut ArgCounter), 3);
    }
}
