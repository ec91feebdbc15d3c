//! Union flattening.
//!
//! A union becomes an alternation of object types that all carry the
//! discriminator as a string literal, so consumers can narrow on it:
//!
//! ```text
//! type Payment = ({ type: "card" } & { readonly "number": string } | { type: "note"; value: string });
//! ```

use apidecl_ir::{Type, UnionType, UnionVariant};

use super::{Lowerer, enum_alternation};
use crate::ast::{Identifier, PropertyKey, PropertySignature, TsType, TypeMember};

/// Property carrying the payload of enum and primitive variants.
pub const VALUE_PROPERTY: &str = "value";

impl Lowerer<'_> {
    /// Lower a union to its parenthesized alternation.
    pub fn lower_union(&self, union: &UnionType) -> TsType {
        let alternatives = union
            .types
            .iter()
            .map(|variant| self.lower_variant(&union.discriminator, variant))
            .collect();
        TsType::parenthesized(TsType::Union(alternatives))
    }

    fn lower_variant(&self, discriminator: &str, variant: &UnionVariant) -> TsType {
        let tag = self.discriminator_property(discriminator, &variant.discriminator_value);

        match &variant.ty {
            Type::Model(name) => {
                let payload = match self.find_model(name) {
                    Some(model) => TsType::TypeLiteral(self.lower_fields(model)),
                    None => self.reference(name),
                };
                TsType::Intersection(vec![TsType::TypeLiteral(vec![tag]), payload])
            }
            Type::Enum(name) => {
                let value = match self.find_enum(name) {
                    Some(enumeration) => enum_alternation(enumeration),
                    None => self.reference(name),
                };
                TsType::TypeLiteral(vec![tag, value_property(value)])
            }
            Type::Primitive(_) => {
                TsType::TypeLiteral(vec![tag, value_property(self.lower_type(&variant.ty))])
            }
            Type::Array(_) | Type::Map(_) | Type::Union(_) => TsType::Unknown,
        }
    }

    fn discriminator_property(&self, discriminator: &str, value: &str) -> TypeMember {
        TypeMember::Property(PropertySignature::new(
            self.property_key(discriminator),
            TsType::literal(value),
        ))
    }
}

fn value_property(ty: TsType) -> TypeMember {
    TypeMember::Property(PropertySignature::new(
        PropertyKey::Identifier(Identifier::new(VALUE_PROPERTY)),
        ty,
    ))
}
