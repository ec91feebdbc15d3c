//! Field, model and declaration lowering.

use apidecl_ir::{EnumType, Field, ModelType, UnionType};

use super::{Lowerer, enum_alternation};
use crate::ast::{Declaration, Interface, PropertyKey, PropertySignature, TypeAlias, TypeMember};

impl Lowerer<'_> {
    /// `readonly "<wire name>"?: <type>`
    ///
    /// Wire names are always quoted and never renamed.
    pub fn lower_field(&self, field: &Field) -> TypeMember {
        TypeMember::Property(
            PropertySignature::new(
                PropertyKey::StringLiteral(field.name.clone()),
                self.lower_type(&field.ty),
            )
            .optional(!field.is_required)
            .readonly(),
        )
    }

    /// One member per field, in declared order.
    pub fn lower_fields(&self, model: &ModelType) -> Vec<TypeMember> {
        model.fields.iter().map(|field| self.lower_field(field)).collect()
    }

    pub fn enum_declaration(&self, enumeration: &EnumType) -> Declaration {
        Declaration::TypeAlias(TypeAlias {
            name: self.type_identifier(&enumeration.short_name),
            ty: enum_alternation(enumeration),
        })
    }

    pub fn model_declaration(&self, model: &ModelType) -> Declaration {
        Declaration::Interface(Interface {
            name: self.type_identifier(&model.short_name),
            members: self.lower_fields(model),
        })
    }

    pub fn union_declaration(&self, union: &UnionType) -> Declaration {
        Declaration::TypeAlias(TypeAlias {
            name: self.type_identifier(&union.short_name),
            ty: self.lower_union(union),
        })
    }
}
