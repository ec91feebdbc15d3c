//! Core type definitions.

use std::fmt;

/// The three declaration spaces a service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DeclarationKind {
    Enums,
    Models,
    Unions,
}

impl DeclarationKind {
    /// All kinds, in emission order.
    pub const ALL: [DeclarationKind; 3] = [
        DeclarationKind::Enums,
        DeclarationKind::Models,
        DeclarationKind::Unions,
    ];

    /// The namespace segment used for this kind (e.g. "models").
    pub fn label(&self) -> &'static str {
        match self {
            DeclarationKind::Enums => "enums",
            DeclarationKind::Models => "models",
            DeclarationKind::Unions => "unions",
        }
    }

    /// Parse a namespace segment back into a kind.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "enums" => Some(DeclarationKind::Enums),
            "models" => Some(DeclarationKind::Models),
            "unions" => Some(DeclarationKind::Unions),
            _ => None,
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primitive kinds understood by the type graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    DateIso8601,
    DateTimeIso8601,
    Uuid,
    Json,
    Boolean,
    Decimal,
    Double,
    Integer,
    Long,
    Object,
    Unit,
    /// A kind this graph has no mapping for. Carried by name so it can be reported.
    Other(String),
}

impl PrimitiveKind {
    /// Look up a known primitive by its schema name.
    pub fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "string" => PrimitiveKind::String,
            "date-iso8601" => PrimitiveKind::DateIso8601,
            "date-time-iso8601" => PrimitiveKind::DateTimeIso8601,
            "uuid" => PrimitiveKind::Uuid,
            "json" => PrimitiveKind::Json,
            "boolean" => PrimitiveKind::Boolean,
            "decimal" => PrimitiveKind::Decimal,
            "double" => PrimitiveKind::Double,
            "integer" => PrimitiveKind::Integer,
            "long" => PrimitiveKind::Long,
            "object" => PrimitiveKind::Object,
            "unit" => PrimitiveKind::Unit,
            _ => return None,
        };
        Some(kind)
    }

    /// The schema name of this primitive.
    pub fn as_str(&self) -> &str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::DateIso8601 => "date-iso8601",
            PrimitiveKind::DateTimeIso8601 => "date-time-iso8601",
            PrimitiveKind::Uuid => "uuid",
            PrimitiveKind::Json => "json",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Integer => "integer",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Object => "object",
            PrimitiveKind::Unit => "unit",
            PrimitiveKind::Other(name) => name,
        }
    }
}

/// Identity of a named type (enum, model or union).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeName {
    /// Name as declared, e.g. "order_line".
    pub short_name: String,
    /// Declaring namespace plus kind segment, e.g. "com.example.v0.models".
    pub package_name: String,
    /// `package_name` joined with `short_name`.
    pub full_name: String,
}

impl TypeName {
    /// Name a type declared in `namespace` under the given kind.
    pub fn new(namespace: &str, kind: DeclarationKind, short_name: impl Into<String>) -> Self {
        let short_name = short_name.into();
        let package_name = format!("{}.{}", namespace, kind.label());
        let full_name = format!("{}.{}", package_name, short_name);
        Self {
            short_name,
            package_name,
            full_name,
        }
    }
}

/// A reference to a type from a field or union variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveKind),
    Array(Box<Type>),
    Map(Box<Type>),
    Enum(TypeName),
    Model(TypeName),
    Union(TypeName),
}

impl Type {
    pub fn array(of: Type) -> Self {
        Type::Array(Box::new(of))
    }

    pub fn map(of: Type) -> Self {
        Type::Map(Box::new(of))
    }
}
