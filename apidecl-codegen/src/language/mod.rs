//! Language-specific abstractions.
//!
//! - [`Generator`] - Trait implemented by every output format
//! - [`IdentifierChecker`] - Identifier legality capability
//! - [`IdentifierRules`] - Reserved words plus lexical grammar

mod naming;
mod traits;

pub use naming::{IdentifierCheck, IdentifierChecker, IdentifierRules};
pub use traits::{Generator, GeneratorSummary};
