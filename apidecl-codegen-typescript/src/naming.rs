//! ECMAScript 3 identifier rules.

use apidecl_codegen::language::IdentifierRules;

// ASCII only; names outside it are rewritten rather than emitted.
fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '$' || c == '_'
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

/// Reserved words and identifier grammar of ECMAScript 3.
///
/// The ES3 list is stricter than later editions (it still reserves `int`,
/// `native` and friends), which keeps emitted names valid for every
/// consumer of the declarations.
pub const ES3_IDENTIFIERS: IdentifierRules = IdentifierRules {
    reserved_words: &[
        // Keywords
        "break",
        "case",
        "catch",
        "continue",
        "default",
        "delete",
        "do",
        "else",
        "finally",
        "for",
        "function",
        "if",
        "in",
        "instanceof",
        "new",
        "return",
        "switch",
        "this",
        "throw",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        // Future reserved words
        "abstract",
        "boolean",
        "byte",
        "char",
        "class",
        "const",
        "debugger",
        "double",
        "enum",
        "export",
        "extends",
        "final",
        "float",
        "goto",
        "implements",
        "import",
        "int",
        "interface",
        "long",
        "native",
        "package",
        "private",
        "protected",
        "public",
        "short",
        "static",
        "super",
        "synchronized",
        "throws",
        "transient",
        "volatile",
        // Literals
        "null",
        "true",
        "false",
    ],
    is_start: is_identifier_start,
    is_part: is_identifier_part,
};

#[cfg(test)]
mod tests {
    use apidecl_codegen::{IdentifierCheck, IdentifierChecker};

    use super::*;

    #[test]
    fn test_legal_identifiers() {
        for name in ["com", "v0", "OrderLine", "$ref", "_private", "a1b2"] {
            assert!(ES3_IDENTIFIERS.is_legal(name), "{name} should be legal");
        }
    }

    #[test]
    fn test_reserved_words() {
        assert_eq!(ES3_IDENTIFIERS.check("class"), IdentifierCheck::Reserved);
        assert_eq!(ES3_IDENTIFIERS.check("native"), IdentifierCheck::Reserved);
        assert_eq!(ES3_IDENTIFIERS.check("null"), IdentifierCheck::Reserved);
        // Case matters
        assert!(ES3_IDENTIFIERS.is_legal("Class"));
    }

    #[test]
    fn test_invalid_identifiers() {
        for name in [
            "",
            "0day",
            "order-api",
            "a b",
            "a.b",
            "v²",
            "a½",
            "\u{345}x",
            "café",
        ] {
            assert_eq!(
                ES3_IDENTIFIERS.check(name),
                IdentifierCheck::Invalid,
                "{name} should be invalid"
            );
        }
    }
}
