//! Named-type reference resolution.

use std::iter;

use apidecl_ir::{EnumType, ModelType, Service, TypeName};

use super::{Lowerer, build_qualified_name};
use crate::ast::{QualifiedName, TsType};

impl<'a> Lowerer<'a> {
    /// Reference a named type, or `unknown` if it is known not to resolve.
    pub fn reference(&self, name: &TypeName) -> TsType {
        if self.context.is_unresolved(name) {
            return TsType::Unknown;
        }
        match self.qualified_name(name) {
            Some(qualified) => TsType::Reference(qualified),
            None => TsType::Unknown,
        }
    }

    /// `<sanitized package segments>.<TypeIdentifier>`
    pub fn qualified_name(&self, name: &TypeName) -> Option<QualifiedName> {
        let segments = name
            .package_name
            .split('.')
            .map(|segment| self.safe_identifier(segment));
        build_qualified_name(segments.chain(iter::once(self.type_identifier(&name.short_name))))
    }

    /// Declaration of a referenced model, if the context carries it.
    pub(super) fn find_model(&self, name: &TypeName) -> Option<&'a ModelType> {
        self.declaring_service(name)?
            .models
            .iter()
            .find(|model| model.short_name == name.short_name)
    }

    /// Declaration of a referenced enum, if the context carries it.
    pub(super) fn find_enum(&self, name: &TypeName) -> Option<&'a EnumType> {
        self.declaring_service(name)?
            .enums
            .iter()
            .find(|enumeration| enumeration.short_name == name.short_name)
    }

    fn declaring_service(&self, name: &TypeName) -> Option<&'a Service> {
        if self.context.is_unresolved(name) {
            return None;
        }
        let (namespace, _kind) = name.package_name.rsplit_once('.')?;
        self.context.service(namespace)
    }
}
