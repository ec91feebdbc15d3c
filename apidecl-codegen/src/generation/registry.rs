//! Explicit registry of generators.
//!
//! The registry is built by the caller and passed to whatever serves
//! invocations; there is no process-wide generator table.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = GeneratorRegistry::new();
//! registry.register(TsDeclarationsGenerator::new());
//!
//! let generator = registry.get("ts_declarations").unwrap();
//! let files = generator.generate(&form)?;
//! ```

use indexmap::IndexMap;

use crate::language::{Generator, GeneratorSummary};

/// Default page size for [`GeneratorRegistry::summaries`].
pub const DEFAULT_LIMIT: usize = 10;

/// Generators keyed by [`Generator::key`], in registration order.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: IndexMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator, replacing any earlier one with the same key.
    pub fn register(&mut self, generator: impl Generator + 'static) -> &mut Self {
        self.generators.insert(generator.key(), Box::new(generator));
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with(mut self, generator: impl Generator + 'static) -> Self {
        self.register(generator);
        self
    }

    /// Look up a generator by key.
    pub fn get(&self, key: &str) -> Option<&dyn Generator> {
        self.generators.get(key).map(|g| g.as_ref())
    }

    /// Summary of a single generator.
    pub fn summary(&self, key: &str) -> Option<GeneratorSummary> {
        self.get(key).map(|g| g.summary())
    }

    /// A page of generator summaries, in registration order.
    pub fn summaries(&self, offset: usize, limit: usize) -> Vec<GeneratorSummary> {
        self.generators
            .values()
            .skip(offset)
            .take(limit)
            .map(|g| g.summary())
            .collect()
    }

    /// Registered keys, in registration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.generators.keys().copied()
    }

    /// Get the number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }
}

impl std::fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("keys", &self.generators.keys().collect::<Vec<_>>())
            .finish()
    }
}
