//! Identifier legality for target languages.

/// Outcome of checking a candidate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierCheck {
    /// Usable as-is.
    Legal,
    /// Lexically valid but reserved by the language.
    Reserved,
    /// Not a valid identifier at all (empty, bad start or part character).
    Invalid,
}

impl IdentifierCheck {
    pub fn is_legal(&self) -> bool {
        matches!(self, IdentifierCheck::Legal)
    }
}

/// Capability that decides whether a name can be emitted as an identifier.
///
/// Generators are handed a checker rather than hard-coding a word list, so
/// the same lowering can target dialects with different reserved words.
pub trait IdentifierChecker: Send + Sync {
    /// Check a candidate identifier.
    fn check(&self, identifier: &str) -> IdentifierCheck;

    /// Shorthand for `check(identifier).is_legal()`.
    fn is_legal(&self, identifier: &str) -> bool {
        self.check(identifier).is_legal()
    }
}

/// Language identifier rules: a reserved word list plus the lexical grammar.
#[derive(Debug, Clone, Copy)]
pub struct IdentifierRules {
    /// Words that may never be used as identifiers.
    pub reserved_words: &'static [&'static str],
    /// Characters allowed in the first position.
    pub is_start: fn(char) -> bool,
    /// Characters allowed after the first position.
    pub is_part: fn(char) -> bool,
}

impl IdentifierRules {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }
}

impl IdentifierChecker for IdentifierRules {
    fn check(&self, identifier: &str) -> IdentifierCheck {
        let mut chars = identifier.chars();
        let valid = match chars.next() {
            None => false,
            Some(first) => (self.is_start)(first) && chars.all(self.is_part),
        };

        if !valid {
            IdentifierCheck::Invalid
        } else if self.is_reserved(identifier) {
            IdentifierCheck::Reserved
        } else {
            IdentifierCheck::Legal
        }
    }
}
