//! Identifier resolution.

use apidecl_codegen::{IdentifierCheck, IdentifierChecker};
use apidecl_core::to_pascal_case;

use super::Lowerer;
use crate::ast::{Identifier, PropertyKey, QualifiedName};

/// Prefix marking a name that was not a legal identifier.
pub const RESERVED_WORD_PREFIX: &str = "RESERVED_WORD_";

/// PascalCase a declared name (`order_line` -> `OrderLine`).
pub fn pascal_case(name: &str) -> String {
    to_pascal_case(name)
}

/// Fold identifiers left to right into a qualified name.
///
/// `[a, b, c]` becomes `((a).b).c`. Returns `None` for an empty list.
pub fn build_qualified_name(
    identifiers: impl IntoIterator<Item = Identifier>,
) -> Option<QualifiedName> {
    let mut identifiers = identifiers.into_iter();
    let first = QualifiedName::Identifier(identifiers.next()?);
    Some(identifiers.fold(first, QualifiedName::qualify))
}

impl Lowerer<'_> {
    /// Return `name` unchanged if it is a legal identifier, otherwise prefixed.
    ///
    /// The prefixed form is not checked again.
    pub fn safe_identifier(&self, name: &str) -> Identifier {
        if self.identifiers.is_legal(name) {
            Identifier::new(name)
        } else {
            Identifier::new(format!("{RESERVED_WORD_PREFIX}{name}"))
        }
    }

    /// Declaration name for a type's short name.
    pub fn type_identifier(&self, short_name: &str) -> Identifier {
        self.safe_identifier(&pascal_case(short_name))
    }

    /// Property key for a literal wire name.
    ///
    /// Reserved words are fine as property names, so only names that are not
    /// identifiers at all get quoted.
    pub fn property_key(&self, name: &str) -> PropertyKey {
        match self.identifiers.check(name) {
            IdentifierCheck::Legal | IdentifierCheck::Reserved => {
                PropertyKey::Identifier(Identifier::new(name))
            }
            IdentifierCheck::Invalid => PropertyKey::StringLiteral(name.to_string()),
        }
    }
}
