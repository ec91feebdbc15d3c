//! Primitive and structural lowering.

use apidecl_ir::{EnumType, PrimitiveKind, Type};

use super::Lowerer;
use crate::ast::{Identifier, IndexSignature, TsType, TypeMember};

/// Map a primitive kind to its TypeScript type. Total.
pub fn lower_primitive(kind: &PrimitiveKind) -> TsType {
    match kind {
        PrimitiveKind::String
        | PrimitiveKind::DateIso8601
        | PrimitiveKind::DateTimeIso8601
        | PrimitiveKind::Uuid
        | PrimitiveKind::Json => TsType::String,
        PrimitiveKind::Boolean => TsType::Boolean,
        PrimitiveKind::Decimal
        | PrimitiveKind::Double
        | PrimitiveKind::Integer
        | PrimitiveKind::Long => TsType::Number,
        PrimitiveKind::Object => string_keyed(TsType::String),
        PrimitiveKind::Unit | PrimitiveKind::Other(_) => TsType::Unknown,
    }
}

/// `{ [key: string]: value }`
pub fn string_keyed(value: TsType) -> TsType {
    TsType::TypeLiteral(vec![TypeMember::Index(IndexSignature {
        parameter: Identifier::new("key"),
        key: TsType::String,
        value,
    })])
}

/// Union of one string literal per enum value, in declared order.
pub fn enum_alternation(enumeration: &EnumType) -> TsType {
    TsType::Union(
        enumeration
            .values
            .iter()
            .map(|value| TsType::literal(value.name.as_str()))
            .collect(),
    )
}

impl Lowerer<'_> {
    /// Lower a field or variant type. Named types lower by reference only.
    pub fn lower_type(&self, ty: &Type) -> TsType {
        match ty {
            Type::Primitive(kind) => lower_primitive(kind),
            Type::Array(element) => TsType::array(self.lower_type(element)),
            Type::Map(value) => string_keyed(self.lower_type(value)),
            Type::Enum(name) | Type::Model(name) | Type::Union(name) => self.reference(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lower::fixtures::{self, BANK, ROOT};

    #[test]
    fn test_primitive_table() {
        let cases = [
            (PrimitiveKind::String, "string"),
            (PrimitiveKind::DateIso8601, "string"),
            (PrimitiveKind::DateTimeIso8601, "string"),
            (PrimitiveKind::Uuid, "string"),
            (PrimitiveKind::Json, "string"),
            (PrimitiveKind::Boolean, "boolean"),
            (PrimitiveKind::Decimal, "number"),
            (PrimitiveKind::Double, "number"),
            (PrimitiveKind::Integer, "number"),
            (PrimitiveKind::Long, "number"),
            (PrimitiveKind::Object, "{ [key: string]: string }"),
            (PrimitiveKind::Unit, "unknown"),
        ];
        for (kind, expected) in cases {
            assert_eq!(lower_primitive(&kind).to_string(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_unmapped_primitive_is_unknown() {
        for name in ["float", "", "date-time-rfc3339"] {
            assert_eq!(
                lower_primitive(&PrimitiveKind::Other(name.to_string())),
                TsType::Unknown
            );
        }
    }

    #[test]
    fn test_structural_types() {
        let context = fixtures::context();
        let lowerer = Lowerer::new(&context);

        let nested = Type::array(Type::map(Type::array(fixtures::string())));
        assert_eq!(
            lowerer.lower_type(&nested).to_string(),
            "{ [key: string]: string[] }[]"
        );
        assert_eq!(
            lowerer
                .lower_type(&Type::map(Type::Primitive(PrimitiveKind::Boolean)))
                .to_string(),
            "{ [key: string]: boolean }"
        );
    }

    #[test]
    fn test_named_types_lower_by_reference() {
        let context = fixtures::context();
        let lowerer = Lowerer::new(&context);

        assert_eq!(
            lowerer.lower_type(&fixtures::enums(ROOT, "color")).to_string(),
            "com.example.v0.enums.Color"
        );
        assert_eq!(
            lowerer
                .lower_type(&Type::array(fixtures::model(BANK, "account")))
                .to_string(),
            "com.bank.v1.models.Account[]"
        );
    }

    #[test]
    fn test_enum_alternation() {
        let color = EnumType::new("color").value("red").value("blue");
        assert_eq!(enum_alternation(&color).to_string(), r#""red" | "blue""#);
        assert_eq!(enum_alternation(&EnumType::new("empty")).to_string(), "never");
    }
}
