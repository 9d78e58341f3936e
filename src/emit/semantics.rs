//! Write type references, substituting generic arguments from the active scopes.

use projgen_metadata::{FormalParameter, FundamentalType, GenericTypeIndex, GenericTypeInstance, TypeName, TypeSemantics};

use super::Writer;
use crate::dispatch::{SemanticsHandler, SemanticsKind, dispatch};
use crate::generics::GenericsError;

/// Handler that renders each case into the borrowed writer.
///
/// `skip` is the number of innermost argument frames the value being written does not see. A value
/// substituted from frame `d` was written relative to the frames beyond it, so its own references
/// resolve with `skip = d + 1`.
struct SemanticsWriter<'w> {
    w: &'w mut Writer,
    skip: usize,
}

impl SemanticsWriter<'_> {
    /// Name an open reference by the formal parameter of the entity being emitted.
    fn write_param_name(&mut self, index: usize) -> Result<(), GenericsError> {
        let name = self.w.get_generic_param(index)?.name().to_string();
        self.w.write(&name);
        Ok(())
    }

    fn write_type_name(&mut self, name: &TypeName) {
        if !name.namespace.is_empty() && name.namespace != self.w.current_namespace() {
            self.w.write(&name.namespace);
            self.w.write(".");
        }
        self.w.write_code(&name.name);
    }
}

impl SemanticsHandler for SemanticsWriter<'_> {
    type Output = Result<(), GenericsError>;

    fn fundamental(&mut self, ty: FundamentalType) -> Self::Output {
        self.w.write(ty.metadata_name());
        Ok(())
    }

    fn object(&mut self) -> Self::Output {
        self.w.write("Object");
        Ok(())
    }

    fn guid(&mut self) -> Self::Output {
        self.w.write("Guid");
        Ok(())
    }

    fn system_type(&mut self) -> Self::Output {
        self.w.write("Type");
        Ok(())
    }

    fn definition(&mut self, name: &TypeName) -> Self::Output {
        self.write_type_name(name);
        Ok(())
    }

    fn generic_instance(&mut self, instance: &GenericTypeInstance) -> Self::Output {
        self.write_type_name(&instance.generic_type);
        self.w.write("<");
        let skip = self.skip;
        self.w
            .write_separated(&instance.generic_args, |w, arg| dispatch(arg, &mut SemanticsWriter { w, skip }))?;
        self.w.write(">");
        Ok(())
    }

    fn param_ref(&mut self, gti: GenericTypeIndex) -> Self::Output {
        if self.skip >= self.w.generic_args().depth() {
            return self.write_param_name(gti.index);
        }
        let (resolved, depth) = self.w.generic_args().resolve(gti.index, self.skip)?;
        match resolved.clone() {
            // Still open after every frame: name it by the current entity's parameter.
            TypeSemantics::GenericParameterReference(open) => self.write_param_name(open.index),
            other => dispatch(
                &other,
                &mut SemanticsWriter {
                    w: &mut *self.w,
                    skip: depth + 1,
                },
            ),
        }
    }

    fn generic_param(&mut self, param: &FormalParameter) -> Self::Output {
        self.w.write(param.name());
        Ok(())
    }
}

impl Writer {
    /// Write a type reference.
    ///
    /// Generic parameter references resolve through the argument stack. A substituted value is written
    /// against the frames outside the one it came from, so references nested in it (the `!0` in
    /// `Box<!0>`) bind to the enclosing instantiation. A reference that stays open is written as the
    /// name of the matching formal parameter of the entity being emitted.
    ///
    /// ## Errors
    /// - Any [`GenericsError`] raised while resolving a parameter reference.
    pub fn write_semantics(&mut self, semantics: &TypeSemantics) -> Result<(), GenericsError> {
        tracing::trace!(kind = ?SemanticsKind::of(semantics), "writing type reference");
        dispatch(semantics, &mut SemanticsWriter { w: self, skip: 0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::WriterConfig;
    use projgen_metadata::GenericDeclaration;

    fn writer() -> Writer {
        Writer::with_namespace("Demo", WriterConfig::default())
    }

    fn pair(args: Vec<TypeSemantics>) -> GenericTypeInstance {
        GenericTypeInstance::new(TypeName::new("Demo", "Pair`2"), args)
    }

    #[test]
    fn test_write_fundamental_and_definitions() {
        let mut w = writer();
        w.write_semantics(&FundamentalType::Int32.into()).unwrap();
        w.write(" ");
        w.write_semantics(&TypeSemantics::Definition(TypeName::new("Demo", "Widget"))).unwrap();
        w.write(" ");
        w.write_semantics(&TypeSemantics::Definition(TypeName::new("Other.Ui", "Button"))).unwrap();
        assert_eq!(w.finish(), "Int32 Widget Other.Ui.Button");
    }

    #[test]
    fn test_write_generic_instance_strips_arity() {
        let mut w = writer();
        let ty = pair(vec![FundamentalType::String.into(), TypeSemantics::Guid]);
        w.write_semantics(&ty.into()).unwrap();
        assert_eq!(w.finish(), "Pair<String, Guid>");
    }

    #[test]
    fn test_param_ref_resolves_through_arguments() {
        let mut w = writer();
        let bound = pair(vec![FundamentalType::Int32.into(), FundamentalType::String.into()]);
        let mut g = w.push_generic_args(&bound).unwrap();
        g.write_semantics(&TypeSemantics::param_ref(1)).unwrap();
        drop(g);
        assert_eq!(w.finish(), "String");
    }

    #[test]
    fn test_open_param_ref_uses_formal_name() {
        let decl = GenericDeclaration::new(TypeName::new("Demo", "Pair`2"), &["K", "V"]);
        let mut w = writer();
        let mut g = w.push_generic_params(decl.generic_params());
        g.write_semantics(&pair(vec![TypeSemantics::param_ref(1), TypeSemantics::param_ref(0)]).into())
            .unwrap();
        drop(g);
        assert_eq!(w.finish(), "Pair<V, K>");
    }

    #[test]
    fn test_param_ref_with_no_scope_fails() {
        let mut w = writer();
        let err = w.write_semantics(&TypeSemantics::param_ref(0)).unwrap_err();
        assert!(matches!(err, GenericsError::OutOfScope { .. }));
    }

    // ========================================
    // Substituted values with nested references
    // ========================================

    fn generic(name: &str, args: Vec<TypeSemantics>) -> GenericTypeInstance {
        GenericTypeInstance::new(TypeName::new("Demo", name), args)
    }

    fn boxed(inner: TypeSemantics) -> TypeSemantics {
        generic("Box`1", vec![inner]).into()
    }

    #[test]
    fn test_substituted_value_resolves_against_outer_frame() {
        let mut w = writer();
        let mut outer = w.push_generic_args(&generic("Outer`1", vec![FundamentalType::Int32.into()])).unwrap();
        let mut middle = outer
            .push_generic_args(&generic("Middle`1", vec![boxed(TypeSemantics::param_ref(0))]))
            .unwrap();
        middle.write_semantics(&TypeSemantics::param_ref(0)).unwrap();
        assert_eq!(middle.as_str(), "Box<Int32>");
    }

    #[test]
    fn test_nested_reference_index_only_valid_in_outer_frame() {
        let mut w = writer();
        let mut outer = w
            .push_generic_args(&generic(
                "Outer`2",
                vec![FundamentalType::Int32.into(), FundamentalType::String.into()],
            ))
            .unwrap();
        let mut middle = outer
            .push_generic_args(&generic("Middle`1", vec![boxed(TypeSemantics::param_ref(1))]))
            .unwrap();
        middle.write_semantics(&TypeSemantics::param_ref(0)).unwrap();
        assert_eq!(middle.as_str(), "Box<String>");
    }

    #[test]
    fn test_substitution_chain_through_three_frames() {
        let mut w = writer();
        let mut a = w.push_generic_args(&generic("A`1", vec![TypeSemantics::Guid])).unwrap();
        let mut b = a.push_generic_args(&generic("B`1", vec![boxed(TypeSemantics::param_ref(0))])).unwrap();
        let mut c = b
            .push_generic_args(&generic("C`1", vec![pair(vec![TypeSemantics::param_ref(0), TypeSemantics::Object]).into()]))
            .unwrap();
        c.write_semantics(&TypeSemantics::param_ref(0)).unwrap();
        assert_eq!(c.as_str(), "Pair<Box<Guid>, Object>");
    }

    #[test]
    fn test_substituted_reference_past_outermost_frame_uses_formal_name() {
        let decl = GenericDeclaration::new(TypeName::new("Demo", "Holder`1"), &["T"]);
        let mut w = writer();
        let mut params = w.push_generic_params(decl.generic_params());
        let mut args = params
            .push_generic_args(&generic("Holder`1", vec![boxed(TypeSemantics::param_ref(0))]))
            .unwrap();
        args.write_semantics(&TypeSemantics::param_ref(0)).unwrap();
        assert_eq!(args.as_str(), "Box<T>");
    }
}
