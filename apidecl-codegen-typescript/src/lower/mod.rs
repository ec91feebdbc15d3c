//! Lowering of the type graph into declaration syntax.
//!
//! Every named type becomes an exported declaration inside an ambient
//! namespace chain `<service namespace>.<kind>`. Named types are only ever
//! referred to by qualified name, so recursive and mutually recursive types
//! lower to finite trees.
//!
//! Lowering never fails. Anything that cannot be expressed (an unresolved
//! reference, an unmapped primitive, a variant kind unions cannot carry)
//! degrades to `unknown`.
//!
//! # Example
//!
//! ```ignore
//! let context = form.context()?;
//! let modules = Lowerer::new(&context).module_declarations();
//! ```

mod declarations;
mod identifiers;
mod namespaces;
mod primitives;
mod references;
mod unions;

use apidecl_codegen::IdentifierChecker;
use apidecl_ir::Context;

pub use identifiers::{RESERVED_WORD_PREFIX, build_qualified_name, pascal_case};
pub use namespaces::build_module_declaration;
pub use primitives::{enum_alternation, lower_primitive, string_keyed};

use crate::{ast::ModuleDeclaration, naming::ES3_IDENTIFIERS};

/// Lowers one [`Context`] into TypeScript declarations.
///
/// Holds only shared references, so one lowerer can serve any number of
/// threads.
#[derive(Clone, Copy)]
pub struct Lowerer<'a> {
    context: &'a Context,
    identifiers: &'a dyn IdentifierChecker,
}

impl<'a> Lowerer<'a> {
    /// Lower with the ECMAScript 3 identifier rules.
    pub fn new(context: &'a Context) -> Self {
        Self::with_checker(context, &ES3_IDENTIFIERS)
    }

    /// Lower with custom identifier rules.
    pub fn with_checker(context: &'a Context, identifiers: &'a dyn IdentifierChecker) -> Self {
        Self {
            context,
            identifiers,
        }
    }
}

impl std::fmt::Debug for Lowerer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lowerer")
            .field("service", &self.context.root_service.name)
            .finish_non_exhaustive()
    }
}

/// Lower every service in `context` with the default identifier rules.
pub fn build_module_declarations(context: &Context) -> Vec<ModuleDeclaration> {
    Lowerer::new(context).module_declarations()
}


#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::TsDeclarationsGenerator;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_engine_types_are_send_and_sync() {
        assert_send_sync::<Lowerer<'static>>();
        assert_send_sync::<Context>();
        assert_send_sync::<ModuleDeclaration>();
        assert_send_sync::<TsDeclarationsGenerator>();
    }

    #[test]
    fn test_parallel_lowering_agrees() {
        let context = fixtures::context();
        let lowerer = Lowerer::new(&context);
        let expected = lowerer.module_declarations();

        let results: Vec<_> = thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(move || lowerer.module_declarations()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        assert_eq!(results.len(), 4);
        for modules in results {
            assert_eq!(modules, expected);
        }
    }
}
