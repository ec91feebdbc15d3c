//! Services and the named types they declare.

use crate::{DeclarationKind, Type, TypeName};

/// A named collection of enums, models and unions under one namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Application name, e.g. "order-api".
    pub name: String,
    /// Dotted namespace, e.g. "com.example.v0".
    pub namespace: String,
    pub enums: Vec<EnumType>,
    pub models: Vec<ModelType>,
    pub unions: Vec<UnionType>,
}

impl Service {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            enums: Vec::new(),
            models: Vec::new(),
            unions: Vec::new(),
        }
    }

    pub fn with_enum(mut self, enumeration: EnumType) -> Self {
        self.enums.push(enumeration);
        self
    }

    pub fn with_model(mut self, model: ModelType) -> Self {
        self.models.push(model);
        self
    }

    pub fn with_union(mut self, union: UnionType) -> Self {
        self.unions.push(union);
        self
    }

    /// Number of declarations of the given kind.
    pub fn count(&self, kind: DeclarationKind) -> usize {
        match kind {
            DeclarationKind::Enums => self.enums.len(),
            DeclarationKind::Models => self.models.len(),
            DeclarationKind::Unions => self.unions.len(),
        }
    }

    /// Name a type declared by this service.
    pub fn type_name(&self, kind: DeclarationKind, short_name: &str) -> TypeName {
        TypeName::new(&self.namespace, kind, short_name)
    }

    /// Find which kind, if any, declares `short_name` in this service.
    ///
    /// Enums are checked first, then models, then unions.
    pub fn kind_of(&self, short_name: &str) -> Option<DeclarationKind> {
        if self.enums.iter().any(|e| e.short_name == short_name) {
            Some(DeclarationKind::Enums)
        } else if self.models.iter().any(|m| m.short_name == short_name) {
            Some(DeclarationKind::Models)
        } else if self.unions.iter().any(|u| u.short_name == short_name) {
            Some(DeclarationKind::Unions)
        } else {
            None
        }
    }

    /// Check whether `short_name` is declared under the given kind.
    pub fn declares(&self, kind: DeclarationKind, short_name: &str) -> bool {
        match kind {
            DeclarationKind::Enums => self.enums.iter().any(|e| e.short_name == short_name),
            DeclarationKind::Models => self.models.iter().any(|m| m.short_name == short_name),
            DeclarationKind::Unions => self.unions.iter().any(|u| u.short_name == short_name),
        }
    }
}

/// One value of an enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
}

/// An enum declaration. Values keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub short_name: String,
    pub values: Vec<EnumValue>,
}

impl EnumType {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.values.push(EnumValue { name: name.into() });
        self
    }
}

/// A model field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Literal wire name; never identifier-transformed.
    pub name: String,
    pub ty: Type,
    pub is_required: bool,
}

impl Field {
    /// Create a required field.
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            is_required: true,
        }
    }

    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }
}

/// A model declaration. Fields keep their declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelType {
    pub short_name: String,
    pub fields: Vec<Field>,
}

impl ModelType {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// One alternative of a union, paired with its discriminator literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionVariant {
    pub ty: Type,
    pub discriminator_value: String,
}

/// A tagged union declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnionType {
    pub short_name: String,
    /// Field whose literal string value selects the active variant.
    pub discriminator: String,
    pub types: Vec<UnionVariant>,
}

impl UnionType {
    pub fn new(short_name: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self {
            short_name: short_name.into(),
            discriminator: discriminator.into(),
            types: Vec::new(),
        }
    }

    pub fn variant(mut self, ty: Type, discriminator_value: impl Into<String>) -> Self {
        self.types.push(UnionVariant {
            ty,
            discriminator_value: discriminator_value.into(),
        });
        self
    }
}
