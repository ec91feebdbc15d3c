//! The `ts_declarations` generator.

use apidecl_codegen::{Generator, GeneratorRegistry, IdentifierChecker};
use apidecl_core::{OutputFile, to_kebab_case};
use apidecl_schema::InvocationForm;
use eyre::{Result, WrapErr};
use tracing::debug;

use crate::{code_file::DeclarationFile, lower::Lowerer, naming::ES3_IDENTIFIERS};

/// Generates one ambient `.d.ts` file covering the service and its imports.
pub struct TsDeclarationsGenerator {
    identifiers: Box<dyn IdentifierChecker>,
}

impl TsDeclarationsGenerator {
    pub const KEY: &'static str = "ts_declarations";

    pub fn new() -> Self {
        Self::with_checker(ES3_IDENTIFIERS)
    }

    /// Use different identifier rules when sanitizing names.
    pub fn with_checker(identifiers: impl IdentifierChecker + 'static) -> Self {
        Self {
            identifiers: Box::new(identifiers),
        }
    }
}

impl Default for TsDeclarationsGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for TsDeclarationsGenerator {
    fn key(&self) -> &'static str {
        Self::KEY
    }

    fn name(&self) -> &'static str {
        "TypeScript Declarations"
    }

    fn language(&self) -> &'static str {
        "typescript"
    }

    fn description(&self) -> &'static str {
        "Ambient TypeScript namespaces declaring every enum, model and union"
    }

    fn generate(&self, form: &InvocationForm) -> Result<Vec<OutputFile>> {
        let context = form
            .context()
            .wrap_err("Failed to build type graph from service spec")?;
        let service = &context.root_service;

        let modules =
            Lowerer::with_checker(&context, self.identifiers.as_ref()).module_declarations();
        debug!(
            service = %service.name,
            modules = modules.len(),
            unresolved = context.unresolved_types.len(),
            "lowered declarations"
        );

        let contents = DeclarationFile::new()
            .header(format!(
                "Declarations for {} ({}). Generated by apidecl; do not edit.",
                service.name, service.namespace
            ))
            .add_all(&modules)
            .render();

        Ok(vec![OutputFile::new(
            format!("{}.d.ts", to_kebab_case(&service.name)),
            contents,
        )])
    }
}

/// Register every generator this crate provides.
pub fn register(registry: &mut GeneratorRegistry) {
    registry.register(TsDeclarationsGenerator::new());
}
