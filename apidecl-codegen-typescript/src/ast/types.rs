//! TypeScript type syntax.
//!
//! Types render on a single line through [`Display`](fmt::Display); only
//! declarations span multiple lines.

use std::fmt;

/// A single identifier. Legality is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A possibly dotted name such as `a.b.C`, nested to the left.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QualifiedName {
    Identifier(Identifier),
    Qualified {
        left: Box<QualifiedName>,
        right: Identifier,
    },
}

impl QualifiedName {
    /// Qualify this name with one more segment on the right.
    pub fn qualify(self, right: Identifier) -> Self {
        QualifiedName::Qualified {
            left: Box::new(self),
            right,
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QualifiedName::Identifier(id) => write!(f, "{id}"),
            QualifiedName::Qualified { left, right } => write!(f, "{left}.{right}"),
        }
    }
}

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TsType {
    String,
    Number,
    Boolean,
    Unknown,
    /// A string literal type, e.g. `"red"`.
    Literal(String),
    Array(Box<TsType>),
    /// An inline object type `{ ... }`.
    TypeLiteral(Vec<TypeMember>),
    Union(Vec<TsType>),
    Intersection(Vec<TsType>),
    Parenthesized(Box<TsType>),
    Reference(QualifiedName),
}

impl TsType {
    pub fn literal(value: impl Into<String>) -> Self {
        TsType::Literal(value.into())
    }

    pub fn array(element: TsType) -> Self {
        TsType::Array(Box::new(element))
    }

    pub fn parenthesized(inner: TsType) -> Self {
        TsType::Parenthesized(Box::new(inner))
    }

    /// Whether this type needs parentheses when used as an array element.
    fn binds_loosely(&self) -> bool {
        matches!(self, TsType::Union(_) | TsType::Intersection(_))
    }
}

impl fmt::Display for TsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TsType::String => f.write_str("string"),
            TsType::Number => f.write_str("number"),
            TsType::Boolean => f.write_str("boolean"),
            TsType::Unknown => f.write_str("unknown"),
            TsType::Literal(value) => f.write_str(&quote(value)),
            TsType::Array(element) if element.binds_loosely() => write!(f, "({element})[]"),
            TsType::Array(element) => write!(f, "{element}[]"),
            TsType::TypeLiteral(members) if members.is_empty() => f.write_str("{}"),
            TsType::TypeLiteral(members) => {
                f.write_str("{ ")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str(" }")
            }
            TsType::Union(types) if types.is_empty() => f.write_str("never"),
            TsType::Union(types) => join(f, types, " | ", |_| false),
            TsType::Intersection(types) if types.is_empty() => f.write_str("unknown"),
            TsType::Intersection(types) => {
                join(f, types, " & ", |t| matches!(t, TsType::Union(_)))
            }
            TsType::Parenthesized(inner) => write!(f, "({inner})"),
            TsType::Reference(name) => write!(f, "{name}"),
        }
    }
}

fn join(
    f: &mut fmt::Formatter<'_>,
    types: &[TsType],
    separator: &str,
    needs_parens: impl Fn(&TsType) -> bool,
) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        if needs_parens(ty) {
            write!(f, "({ty})")?;
        } else {
            write!(f, "{ty}")?;
        }
    }
    Ok(())
}

/// A member of an object type or interface body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMember {
    Property(PropertySignature),
    Index(IndexSignature),
}

impl fmt::Display for TypeMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeMember::Property(property) => write!(f, "{property}"),
            TypeMember::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Key of a property signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    Identifier(Identifier),
    /// Emitted quoted, so any text is allowed.
    StringLiteral(String),
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::Identifier(id) => write!(f, "{id}"),
            PropertyKey::StringLiteral(key) => f.write_str(&quote(key)),
        }
    }
}

/// `readonly key?: type`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySignature {
    pub key: PropertyKey,
    pub ty: TsType,
    pub optional: bool,
    pub readonly: bool,
}

impl PropertySignature {
    pub fn new(key: PropertyKey, ty: TsType) -> Self {
        Self {
            key,
            ty,
            optional: false,
            readonly: false,
        }
    }

    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

impl fmt::Display for PropertySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.readonly {
            f.write_str("readonly ")?;
        }
        write!(f, "{}", self.key)?;
        if self.optional {
            f.write_str("?")?;
        }
        write!(f, ": {}", self.ty)
    }
}

/// `[parameter: key]: value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSignature {
    pub parameter: Identifier,
    pub key: TsType,
    pub value: TsType,
}

impl fmt::Display for IndexSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}]: {}", self.parameter, self.key, self.value)
    }
}

/// Quote text as a double-quoted string literal.
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
