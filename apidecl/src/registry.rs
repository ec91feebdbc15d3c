//! Generators available from the command line.

use apidecl_codegen::GeneratorRegistry;

/// Build the registry of every generator this binary ships with.
pub fn build() -> GeneratorRegistry {
    let mut registry = GeneratorRegistry::new();
    apidecl_codegen_typescript::register(&mut registry);
    registry
}
