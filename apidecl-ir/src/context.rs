//! Build context for one generation run.

use std::collections::HashSet;

use crate::{Service, TypeName};

/// Everything the lowering needs for one invocation.
///
/// Built once from an already-parsed schema graph and never mutated while
/// declarations are being produced.
#[derive(Debug, Clone)]
pub struct Context {
    /// The service being generated for.
    pub root_service: Service,
    /// Services whose types may be cross-referenced, in request order.
    pub imported_services: Vec<Service>,
    /// Fully-qualified names known not to resolve in this graph.
    pub unresolved_types: HashSet<String>,
}

impl Context {
    pub fn new(root_service: Service) -> Self {
        Self {
            root_service,
            imported_services: Vec::new(),
            unresolved_types: HashSet::new(),
        }
    }

    pub fn with_imported(mut self, service: Service) -> Self {
        self.imported_services.push(service);
        self
    }

    pub fn with_unresolved(mut self, full_name: impl Into<String>) -> Self {
        self.unresolved_types.insert(full_name.into());
        self
    }

    /// Check whether a named type is known to be unresolvable.
    pub fn is_unresolved(&self, name: &TypeName) -> bool {
        self.unresolved_types.contains(&name.full_name)
    }

    /// Imported services in order, followed by the root service.
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.imported_services
            .iter()
            .chain(std::iter::once(&self.root_service))
    }

    /// Find a service by namespace among the root and imported services.
    pub fn service(&self, namespace: &str) -> Option<&Service> {
        self.services().find(|s| s.namespace == namespace)
    }
}
