//! List operation - page through registered generators.

use apidecl_codegen::GeneratorRegistry;

use crate::reports::ListReport;

pub fn list(registry: &GeneratorRegistry, offset: usize, limit: usize) -> ListReport {
    ListReport {
        generators: registry.summaries(offset, limit),
        total: registry.len(),
        offset,
    }
}
