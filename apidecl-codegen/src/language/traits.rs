//! Language-agnostic code generation traits.

use apidecl_core::OutputFile;
use apidecl_schema::InvocationForm;
use eyre::Result;
use serde::Serialize;

/// Trait for generators that can be invoked by key.
///
/// Implement this trait to add a new output format. Generators are
/// registered explicitly in a [`GeneratorRegistry`](crate::generation::GeneratorRegistry).
pub trait Generator: Send + Sync {
    /// Registry key (e.g., "ts_declarations")
    fn key(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Target language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// One-line description shown in listings
    fn description(&self) -> &'static str;

    /// Produce the output files for a generation request.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be turned into a type graph.
    fn generate(&self, form: &InvocationForm) -> Result<Vec<OutputFile>>;

    /// Describe this generator without its implementation.
    fn summary(&self) -> GeneratorSummary {
        GeneratorSummary {
            key: self.key(),
            name: self.name(),
            language: self.language(),
            description: self.description(),
        }
    }
}

/// Public description of a registered generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorSummary {
    pub key: &'static str,
    pub name: &'static str,
    pub language: &'static str,
    pub description: &'static str,
}
